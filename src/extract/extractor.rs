use crate::error::SkipReason;
use crate::extract::amount::normalize_amount;
use crate::extract::classify::test_signal;
use crate::extract::fields::{self, first_present, EventView, Scope};
use crate::record::{CleanRecord, FieldValue};

use serde_json::Value;

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_STATUS: &str = "UNKNOWN";

/// Turn one input line into a clean record, or say why it was dropped.
///
/// `currency` and `status` always come out as text: a number or boolean in
/// either slot is written in its JSON form, so `5` becomes `"5"`.
pub fn extract_record(line: &[u8]) -> Result<CleanRecord, SkipReason> {
    let data: Value = serde_json::from_slice(line).map_err(|_| SkipReason::Malformed)?;
    let envelope = data.as_object().ok_or(SkipReason::Malformed)?;
    let view = EventView::new(envelope);

    let order_id = first_present(&view, fields::ORDER_ID).and_then(FieldValue::from_json);
    let payment_id = first_present(&view, fields::PAYMENT_ID).and_then(FieldValue::from_json);
    let amount_usd = first_present(&view, fields::AMOUNT).and_then(normalize_amount);

    let Some(amount_usd) = amount_usd else {
        return Err(SkipReason::UnparseableAmount);
    };
    if order_id.is_none() && payment_id.is_none() {
        return Err(SkipReason::MissingIdentifiers);
    }
    if is_test_event(&view) {
        return Err(SkipReason::TestRecord);
    }

    Ok(CleanRecord {
        order_id,
        payment_id,
        amount_usd,
        currency: text_or(&view, fields::CURRENCY, DEFAULT_CURRENCY),
        status: text_or(&view, fields::STATUS, DEFAULT_STATUS),
        timestamp: first_present(&view, fields::TIMESTAMP).and_then(FieldValue::from_json),
        raw_event_type: fields::EVENT_TYPE
            .resolve(&view)
            .and_then(FieldValue::from_json),
        source: fields::EVENT_SOURCE
            .resolve(&view)
            .and_then(FieldValue::from_json),
    })
}

fn is_test_event(view: &EventView<'_>) -> bool {
    let scopes = [Scope::Envelope, Scope::Payload, Scope::Event];

    for obj in scopes.iter().filter_map(|scope| view.scope(*scope)) {
        if let Some(signal) = test_signal(obj) {
            tracing::trace!(?signal, "test signal found");
            return true;
        }
    }
    false
}

fn text_or(view: &EventView<'_>, paths: &[fields::FieldPath], default: &str) -> String {
    first_present(view, paths)
        .and_then(FieldValue::from_json)
        .map(|value| value.to_string())
        .unwrap_or_else(|| default.to_string())
}
