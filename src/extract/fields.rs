use serde_json::{Map, Value};

/// The sub-object of an event a path starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Envelope,
    Payload,
    Event,
    Entity,
}

/// A key path into one scope of an event, e.g. `entity.order.id`.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath {
    pub scope: Scope,
    pub keys: &'static [&'static str],
}

impl FieldPath {
    pub const fn new(scope: Scope, keys: &'static [&'static str]) -> Self {
        Self { scope, keys }
    }

    pub fn resolve<'a>(&self, view: &EventView<'a>) -> Option<&'a Value> {
        let (first, rest) = self.keys.split_first()?;
        let mut current = view.scope(self.scope)?.get(*first)?;
        for key in rest {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }
}

pub const ORDER_ID: &[FieldPath] = &[
    FieldPath::new(Scope::Entity, &["order", "id"]),
    FieldPath::new(Scope::Payload, &["order_id"]),
    FieldPath::new(Scope::Payload, &["orderId"]),
];

pub const PAYMENT_ID: &[FieldPath] = &[
    FieldPath::new(Scope::Entity, &["payment", "id"]),
    FieldPath::new(Scope::Payload, &["id"]),
];

pub const AMOUNT: &[FieldPath] = &[
    FieldPath::new(Scope::Payload, &["Amount"]),
    FieldPath::new(Scope::Payload, &["amount"]),
    FieldPath::new(Scope::Payload, &["amount_cents"]),
    FieldPath::new(Scope::Payload, &["value"]),
];

pub const CURRENCY: &[FieldPath] = &[FieldPath::new(Scope::Payload, &["currency"])];

pub const STATUS: &[FieldPath] = &[
    FieldPath::new(Scope::Payload, &["status"]),
    FieldPath::new(Scope::Event, &["type"]),
];

pub const TIMESTAMP: &[FieldPath] = &[
    FieldPath::new(Scope::Event, &["ts"]),
    FieldPath::new(Scope::Payload, &["timestamp"]),
];

pub const EVENT_TYPE: FieldPath = FieldPath::new(Scope::Event, &["type"]);
pub const EVENT_SOURCE: FieldPath = FieldPath::new(Scope::Event, &["source"]);

/// Borrowed view over the parts of one raw event.
///
/// `payload` falls back to the envelope for flat events. `event` and `entity`
/// are `None` when absent or not objects.
#[derive(Debug, Clone, Copy)]
pub struct EventView<'a> {
    pub envelope: &'a Map<String, Value>,
    pub payload: &'a Map<String, Value>,
    pub event: Option<&'a Map<String, Value>>,
    pub entity: Option<&'a Map<String, Value>>,
}

impl<'a> EventView<'a> {
    pub fn new(envelope: &'a Map<String, Value>) -> Self {
        let payload = envelope
            .get("payload")
            .and_then(Value::as_object)
            .unwrap_or(envelope);

        Self {
            envelope,
            payload,
            event: envelope.get("event").and_then(Value::as_object),
            entity: envelope.get("entity").and_then(Value::as_object),
        }
    }

    pub fn scope(&self, scope: Scope) -> Option<&'a Map<String, Value>> {
        match scope {
            Scope::Envelope => Some(self.envelope),
            Scope::Payload => Some(self.payload),
            Scope::Event => self.event,
            Scope::Entity => self.entity,
        }
    }
}

/// Evaluate `paths` in order and return the first truthy value.
pub fn first_present<'a>(view: &EventView<'a>, paths: &[FieldPath]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| path.resolve(view))
        .find(|value| is_present(value))
}

/// Null, `false`, zero and empty strings or containers count as missing.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
