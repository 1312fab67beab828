use serde_json::{Map, Value};

const TEST_FLAGS: [&str; 2] = ["test", "sandbox"];
const TEST_EMAIL_MARKERS: [&str; 3] = ["@example.com", "@test.com", "sandbox"];
const TEST_MODE_KEYS: [&str; 2] = ["is_test", "test_mode"];

/// Which heuristic marked an object as test traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestSignal {
    Flag,
    CustomerEmail,
    TestMode,
}

pub fn is_test_record(obj: &Map<String, Value>) -> bool {
    test_signal(obj).is_some()
}

pub fn test_signal(obj: &Map<String, Value>) -> Option<TestSignal> {
    if has_test_flag(obj) {
        return Some(TestSignal::Flag);
    }
    if has_test_email(obj) {
        return Some(TestSignal::CustomerEmail);
    }
    if in_test_mode(obj) {
        return Some(TestSignal::TestMode);
    }
    None
}

fn has_test_flag(obj: &Map<String, Value>) -> bool {
    let Some(Value::Array(flags)) = obj.get("flags") else {
        return false;
    };

    flags
        .iter()
        .filter_map(Value::as_str)
        .any(|flag| TEST_FLAGS.iter().any(|t| flag.eq_ignore_ascii_case(t)))
}

fn has_test_email(obj: &Map<String, Value>) -> bool {
    let email = obj
        .get("customer")
        .and_then(|customer| customer.get("email"))
        .and_then(Value::as_str);

    match email {
        Some(email) => {
            let email = email.to_lowercase();
            TEST_EMAIL_MARKERS
                .iter()
                .any(|marker| email.contains(marker))
        }
        None => false,
    }
}

fn in_test_mode(obj: &Map<String, Value>) -> bool {
    TEST_MODE_KEYS
        .iter()
        .filter_map(|key| obj.get(*key))
        .any(is_truthy_marker)
}

fn is_truthy_marker(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s == "true" || s == "True",
        _ => false,
    }
}
