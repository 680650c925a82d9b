use rand::Rng;

/// `ORD-<last 6 digits of the epoch millis>-<0..999>`.
///
/// Two orders in the same millisecond can collide; the number is a human
/// reference, the database id stays the key.
pub fn generate_order_number() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);

    format_order_number(millis, suffix)
}

pub fn format_order_number(epoch_millis: i64, suffix: u32) -> String {
    format!("ORD-{:06}-{}", epoch_millis.rem_euclid(1_000_000), suffix)
}
