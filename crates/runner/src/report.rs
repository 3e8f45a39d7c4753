use common::types::Vector3;

/// Renders the accumulator line: `sum={<s0>, <s1>, <s2>}`.
///
/// Floats use `{:?}` so they keep their shortest round-trip form;
/// `Display` would print `1.0` as `1`.
pub fn render_sum(acc: &Vector3) -> String {
    format!("sum={{{:?}, {:?}, {:?}}}", acc[0], acc[1], acc[2])
}

/// Renders the elapsed-time line: `time=<seconds>`.
pub fn render_time(elapsed_seconds: f64) -> String {
    format!("time={:?}", elapsed_seconds)
}
