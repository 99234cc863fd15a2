//! JSON interchange for expression trees.
//!
//! Lets trees produced by a parser in another process travel as JSON. Every
//! node is an object tagged with a `"type"` field holding its kind name
//! ([`NodeKind::name`], [`StatementKind::name`]); operators travel as their
//! source symbols. Numbers that JSON cannot represent (NaN and the
//! infinities) are written as strings and read back.
//!
//! ```text
//! {"type": "binary", "operator": "||",
//!  "left": {"type": "boolean", "value": true},
//!  "right": {"type": "number", "value": 5.0}}
//! ```

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::ast::{Expr, NodeKind, Operator, Statement, StatementKind};

/// Errors raised while rebuilding a tree from JSON.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("tree node must be a JSON object")]
    NotAnObject,

    #[error("tree node has no \"type\" tag")]
    MissingType,

    #[error("unknown node type {0:?}")]
    UnknownType(String),

    #[error("{node} node is missing field {field:?}")]
    MissingField { node: String, field: &'static str },

    #[error("{node} node has an invalid {field:?} field")]
    InvalidField { node: String, field: &'static str },

    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}

/// Converts an expression tree to its JSON form.
pub fn expr_to_json(expr: &Expr) -> Value {
    let tag = expr.kind().name();
    match expr {
        Expr::Binary { op, left, right } | Expr::Assign { op, left, right } => json!({
            "type": tag,
            "operator": op.symbol(),
            "left": expr_to_json(left),
            "right": expr_to_json(right),
        }),
        Expr::Unary {
            op,
            operand,
            postfix,
        } => json!({
            "type": tag,
            "operator": op.symbol(),
            "operand": expr_to_json(operand),
            "postfix": postfix,
        }),
        Expr::VariableDecl { name, initializer } => json!({
            "type": tag,
            "name": name,
            "initializer": initializer.as_deref().map(expr_to_json),
        }),
        Expr::Identifier(name) => json!({ "type": tag, "name": name }),
        Expr::This => json!({ "type": tag }),
        Expr::Number(n) => json!({ "type": tag, "value": number_to_json(*n) }),
        Expr::String(s) => json!({ "type": tag, "value": s }),
        Expr::Boolean(b) => json!({ "type": tag, "value": b }),
        Expr::Call { callee, args } | Expr::New { callee, args } => json!({
            "type": tag,
            "callee": expr_to_json(callee),
            "arguments": args.iter().map(expr_to_json).collect::<Vec<_>>(),
        }),
        Expr::Function { name, params, body } => json!({
            "type": tag,
            "name": name.as_deref().map(expr_to_json),
            "params": params.iter().map(expr_to_json).collect::<Vec<_>>(),
            "body": body.iter().map(statement_to_json).collect::<Vec<_>>(),
        }),
        Expr::Dot { left, member } | Expr::Bracket { left, member } => json!({
            "type": tag,
            "left": expr_to_json(left),
            "member": expr_to_json(member),
        }),
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => json!({
            "type": tag,
            "test": expr_to_json(test),
            "consequent": expr_to_json(consequent),
            "alternate": expr_to_json(alternate),
        }),
        Expr::Sequence(items) | Expr::Array(items) => json!({
            "type": tag,
            "items": items.iter().map(expr_to_json).collect::<Vec<_>>(),
        }),
        Expr::Object(pairs) => json!({
            "type": tag,
            "properties": pairs
                .iter()
                .map(|(key, value)| json!({ "key": key, "value": expr_to_json(value) }))
                .collect::<Vec<_>>(),
        }),
    }
}

/// Converts a statement to its JSON form.
pub fn statement_to_json(statement: &Statement) -> Value {
    let tag = statement.kind().name();
    match statement {
        Statement::Expression(expr) => json!({ "type": tag, "expression": expr_to_json(expr) }),
        Statement::Return(argument) => {
            json!({ "type": tag, "argument": argument.as_ref().map(expr_to_json) })
        }
        Statement::Throw(argument) => json!({ "type": tag, "argument": expr_to_json(argument) }),
        Statement::Variable(declarators) => json!({
            "type": tag,
            "declarations": declarators.iter().map(expr_to_json).collect::<Vec<_>>(),
        }),
        Statement::Block(body) => json!({
            "type": tag,
            "body": body.iter().map(statement_to_json).collect::<Vec<_>>(),
        }),
        Statement::If {
            test,
            consequent,
            alternate,
        } => json!({
            "type": tag,
            "test": expr_to_json(test),
            "consequent": statement_to_json(consequent),
            "alternate": alternate.as_deref().map(statement_to_json),
        }),
        Statement::While { test, body } => json!({
            "type": tag,
            "test": expr_to_json(test),
            "body": statement_to_json(body),
        }),
        Statement::Empty => json!({ "type": tag }),
    }
}

/// JSON numbers cannot hold NaN or the infinities, so those travel as the
/// strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
fn number_to_json(n: f64) -> Value {
    match serde_json::Number::from_f64(n) {
        Some(number) => Value::Number(number),
        None if n.is_nan() => Value::from("NaN"),
        None if n > 0.0 => Value::from("Infinity"),
        None => Value::from("-Infinity"),
    }
}

fn number_from_json(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    }
}

/// Field accessors for one JSON node, reporting errors against its type tag.
struct Fields<'j> {
    node: &'j str,
    map: &'j Map<String, Value>,
}

impl<'j> Fields<'j> {
    fn of(value: &'j Value) -> Result<Self, ConvertError> {
        let map = value.as_object().ok_or(ConvertError::NotAnObject)?;
        let node = map
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ConvertError::MissingType)?;
        Ok(Fields { node, map })
    }

    fn get(&self, field: &'static str) -> Result<&'j Value, ConvertError> {
        self.map.get(field).ok_or_else(|| ConvertError::MissingField {
            node: self.node.to_string(),
            field,
        })
    }

    fn invalid(&self, field: &'static str) -> ConvertError {
        ConvertError::InvalidField {
            node: self.node.to_string(),
            field,
        }
    }

    fn expr(&self, field: &'static str) -> Result<Box<Expr>, ConvertError> {
        Ok(Box::new(expr_from_json(self.get(field)?)?))
    }

    /// Absent and `null` both read as `None`.
    fn optional_expr(&self, field: &'static str) -> Result<Option<Box<Expr>>, ConvertError> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(Box::new(expr_from_json(value)?))),
        }
    }

    fn array(&self, field: &'static str) -> Result<&'j Vec<Value>, ConvertError> {
        self.get(field)?
            .as_array()
            .ok_or_else(|| self.invalid(field))
    }

    fn exprs(&self, field: &'static str) -> Result<Vec<Expr>, ConvertError> {
        self.array(field)?.iter().map(expr_from_json).collect()
    }

    fn statements(&self, field: &'static str) -> Result<Vec<Statement>, ConvertError> {
        self.array(field)?.iter().map(statement_from_json).collect()
    }

    fn str(&self, field: &'static str) -> Result<&'j str, ConvertError> {
        self.get(field)?.as_str().ok_or_else(|| self.invalid(field))
    }

    fn bool(&self, field: &'static str) -> Result<bool, ConvertError> {
        self.get(field)?.as_bool().ok_or_else(|| self.invalid(field))
    }

    fn operator(&self) -> Result<Operator, ConvertError> {
        let symbol = self.str("operator")?;
        Operator::from_symbol(symbol).ok_or_else(|| ConvertError::UnknownOperator(symbol.to_string()))
    }
}

/// Rebuilds an expression tree from its JSON form.
pub fn expr_from_json(value: &Value) -> Result<Expr, ConvertError> {
    let fields = Fields::of(value)?;
    let kind = NodeKind::from_name(fields.node)
        .ok_or_else(|| ConvertError::UnknownType(fields.node.to_string()))?;

    let expr = match kind {
        NodeKind::Binary => Expr::Binary {
            op: fields.operator()?,
            left: fields.expr("left")?,
            right: fields.expr("right")?,
        },
        NodeKind::Assign => Expr::Assign {
            op: fields.operator()?,
            left: fields.expr("left")?,
            right: fields.expr("right")?,
        },
        NodeKind::Unary => Expr::Unary {
            op: fields.operator()?,
            operand: fields.expr("operand")?,
            postfix: match fields.map.get("postfix") {
                None => false,
                Some(_) => fields.bool("postfix")?,
            },
        },
        NodeKind::VariableDecl => Expr::VariableDecl {
            name: fields.str("name")?.to_string(),
            initializer: fields.optional_expr("initializer")?,
        },
        NodeKind::Identifier => Expr::Identifier(fields.str("name")?.to_string()),
        NodeKind::This => Expr::This,
        NodeKind::Number => Expr::Number(
            number_from_json(fields.get("value")?).ok_or_else(|| fields.invalid("value"))?,
        ),
        NodeKind::String => Expr::String(fields.str("value")?.to_string()),
        NodeKind::Boolean => Expr::Boolean(fields.bool("value")?),
        NodeKind::Call => Expr::Call {
            callee: fields.expr("callee")?,
            args: fields.exprs("arguments")?,
        },
        NodeKind::New => Expr::New {
            callee: fields.expr("callee")?,
            args: fields.exprs("arguments")?,
        },
        NodeKind::Function => Expr::Function {
            name: fields.optional_expr("name")?,
            params: fields.exprs("params")?,
            body: fields.statements("body")?,
        },
        NodeKind::Dot => Expr::Dot {
            left: fields.expr("left")?,
            member: fields.expr("member")?,
        },
        NodeKind::Bracket => Expr::Bracket {
            left: fields.expr("left")?,
            member: fields.expr("member")?,
        },
        NodeKind::Conditional => Expr::Conditional {
            test: fields.expr("test")?,
            consequent: fields.expr("consequent")?,
            alternate: fields.expr("alternate")?,
        },
        NodeKind::Sequence => Expr::Sequence(fields.exprs("items")?),
        NodeKind::Array => Expr::Array(fields.exprs("items")?),
        NodeKind::Object => {
            let pairs = fields
                .array("properties")?
                .iter()
                .map(|property| -> Result<(String, Expr), ConvertError> {
                    let property = Fields {
                        node: fields.node,
                        map: property
                            .as_object()
                            .ok_or_else(|| fields.invalid("properties"))?,
                    };
                    let key = property.str("key")?.to_string();
                    Ok((key, *property.expr("value")?))
                })
                .collect::<Result<Vec<_>, ConvertError>>()?;
            Expr::Object(pairs)
        }
    };

    Ok(expr)
}

/// Rebuilds a statement from its JSON form.
pub fn statement_from_json(value: &Value) -> Result<Statement, ConvertError> {
    let fields = Fields::of(value)?;
    let kind = StatementKind::from_name(fields.node)
        .ok_or_else(|| ConvertError::UnknownType(fields.node.to_string()))?;

    let statement = match kind {
        StatementKind::Expression => Statement::Expression(*fields.expr("expression")?),
        StatementKind::Return => {
            Statement::Return(fields.optional_expr("argument")?.map(|argument| *argument))
        }
        StatementKind::Variable => Statement::Variable(fields.exprs("declarations")?),
        StatementKind::Block => Statement::Block(fields.statements("body")?),
        StatementKind::If => Statement::If {
            test: *fields.expr("test")?,
            consequent: Box::new(statement_from_json(fields.get("consequent")?)?),
            alternate: match fields.map.get("alternate") {
                None | Some(Value::Null) => None,
                Some(alternate) => Some(Box::new(statement_from_json(alternate)?)),
            },
        },
        StatementKind::While => Statement::While {
            test: *fields.expr("test")?,
            body: Box::new(statement_from_json(fields.get("body")?)?),
        },
        StatementKind::Throw => Statement::Throw(*fields.expr("argument")?),
        StatementKind::Empty => Statement::Empty,
    };

    Ok(statement)
}
