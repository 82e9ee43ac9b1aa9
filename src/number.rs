/// Format a floating point number the way a learner would write it.
///
/// Whole numbers don't get a trailing `.0`, negative zero is just `0`, and
/// infinities are spelled out.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // -0.0 + 0.0 == +0.0
    (value + 0.0).to_string()
}
