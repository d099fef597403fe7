//! A small in-memory data model for renderer tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use stache_ir::{PathRef, Resolution, ResolveError, ResolveResult};

use crate::lambda::LambdaContext;
use crate::output::Interpolation;
use crate::resolver::{Lookup, Resolver};

pub(crate) type LambdaFn = Rc<dyn Fn(&mut LambdaContext<'_, '_>) -> ResolveResult>;

pub(crate) enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
    Lambda(LambdaFn),
    /// Fails every lookup with this code.
    Fail(u32),
}

pub(crate) fn s(text: &str) -> Value {
    Value::Str(text.to_owned())
}

pub(crate) fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Map(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

pub(crate) fn list<const N: usize>(items: [Value; N]) -> Value {
    Value::List(items.into())
}

pub(crate) fn lambda(f: impl Fn(&mut LambdaContext<'_, '_>) -> ResolveResult + 'static) -> Value {
    Value::Lambda(Rc::new(f))
}

impl Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null | Value::Bool(false) => false,
            Value::List(items) => !items.is_empty(),
            _ => true,
        }
    }

    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    fn walk(&self, path: PathRef<'_>) -> Result<&Value, Resolution> {
        let Some((head, rest)) = path.split_first() else {
            return Ok(self);
        };
        let mut current = self.field(head).ok_or(Resolution::NotFoundInContext)?;
        for segment in rest.segments() {
            current = current.field(segment).ok_or(Resolution::ChainBroken)?;
        }
        Ok(current)
    }
}

impl Resolver for Value {
    fn get(&self, path: PathRef<'_>) -> Result<Lookup<'_>, ResolveError> {
        let value = match self.walk(path) {
            Ok(value) => value,
            Err(resolution) => return Ok(resolution.into()),
        };
        Ok(match (value, path.index()) {
            (Value::Fail(code), _) => return Err(ResolveError::new(*code)),
            (Value::Lambda(_), _) => Lookup::Lambda,
            (Value::List(items), Some(index)) => {
                items.get(index).map_or(Lookup::IteratorConsumed, |item| Lookup::field(item))
            }
            (value, Some(0)) if value.is_truthy() => Lookup::field(value),
            (_, Some(_)) => Lookup::IteratorConsumed,
            (value, None) => Lookup::field(value),
        })
    }

    fn capacity_hint(&self, path: PathRef<'_>) -> (Resolution, usize) {
        match self.walk(path) {
            Ok(Value::Str(text)) => (Resolution::Field, text.len()),
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
            Value::Null | Value::List(_) | Value::Map(_) => Ok(()),
            Value::Bool(flag) => out.write_text(if *flag { "true" } else { "false" }),
            Value::Int(number) => out.write_text(&number.to_string()),
            Value::Str(text) => out.write_text(text),
            Value::Lambda(_) => return Ok(Resolution::Lambda),
            Value::Fail(code) => return Err(ResolveError::new(*code)),
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
