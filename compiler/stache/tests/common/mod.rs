//! A JSON-like host data model implementing the resolver protocol.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use stache::{
    Engine, Interpolation, LambdaContext, Lookup, PathRef, Resolution, ResolveError,
    ResolveResult, Resolver,
};

pub type LambdaFn = Arc<dyn Fn(&mut LambdaContext<'_, '_>) -> ResolveResult + Send + Sync>;

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Lambda(LambdaFn),
    /// Every lookup of this value fails with the code.
    Error(u32),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

pub fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

pub fn lambda(
    f: impl Fn(&mut LambdaContext<'_, '_>) -> ResolveResult + Send + Sync + 'static,
) -> Value {
    Value::Lambda(Arc::new(f))
}

impl Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null | Value::Bool(false) => false,
            Value::List(items) => !items.is_empty(),
            _ => true,
        }
    }

    fn member(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    fn walk(&self, path: PathRef<'_>) -> Result<&Value, Resolution> {
        let Some((head, rest)) = path.split_first() else {
            return Ok(self);
        };
        let mut value = self.member(head).ok_or(Resolution::NotFoundInContext)?;
        for segment in rest.segments() {
            value = value.member(segment).ok_or(Resolution::ChainBroken)?;
        }
        Ok(value)
    }
}

impl Resolver for Value {
    fn get(&self, path: PathRef<'_>) -> Result<Lookup<'_>, ResolveError> {
        let value = match self.walk(path) {
            Ok(value) => value,
            Err(resolution) => return Ok(resolution.into()),
        };
        Ok(match (value, path.index()) {
            (Value::Error(code), _) => return Err(ResolveError::new(*code)),
            (Value::Lambda(_), _) => Lookup::Lambda,
            (Value::List(items), Some(index)) => match items.get(index) {
                Some(item) => Lookup::field(item),
                None => Lookup::IteratorConsumed,
            },
            (value, Some(0)) if value.is_truthy() => Lookup::field(value),
            (_, Some(_)) => Lookup::IteratorConsumed,
            (value, None) => Lookup::field(value),
        })
    }

    fn capacity_hint(&self, path: PathRef<'_>) -> (Resolution, usize) {
        match self.walk(path) {
            Ok(Value::Str(text)) => (Resolution::Field, text.len()),
            Ok(Value::Int(_) | Value::Float(_)) => (Resolution::Field, 8),
            Ok(Value::Lambda(_)) => (Resolution::Lambda, 0),
            Ok(_) => (Resolution::Field, 0),
            Err(resolution) => (resolution, 0),
        }
    }

    fn interpolate(&self, path: PathRef<'_>, out: &mut Interpolation<'_, '_>) -> ResolveResult {
        let value = match self.walk(path) {
            Ok(value) => value,
            Err(resolution) => return Ok(resolution),
        };
        let written = match value {
            Value::Null | Value::List(_) | Value::Object(_) => Ok(()),
            Value::Bool(flag) => write!(out, "{flag}"),
            Value::Int(number) => write!(out, "{number}"),
            Value::Float(number) => write!(out, "{number}"),
            Value::Str(text) => out.write_str(text),
            Value::Lambda(_) => return Ok(Resolution::Lambda),
            Value::Error(code) => return Err(ResolveError::new(*code)),
        };
        written.map_err(|_| ResolveError::ABORTED)?;
        Ok(Resolution::Field)
    }

    fn expand_lambda(
        &self,
        path: PathRef<'_>,
        lambda: &mut LambdaContext<'_, '_>,
    ) -> ResolveResult {
        match self.walk(path) {
            Ok(Value::Lambda(f)) => (**f)(lambda),
            Ok(_) => Ok(Resolution::Field),
            Err(resolution) => Ok(resolution),
        }
    }
}

/// Compile and render `source` with a default engine.
pub fn render(source: &str, data: &Value) -> String {
    Engine::default()
        .render_source(source, data)
        .expect("template renders")
}
