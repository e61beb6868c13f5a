/// Parses a typed value. Anything that isn't a number becomes NaN and is
/// carried through the formulas like any other value.
pub fn parse_value(text: &str) -> f64 {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            log::debug!("Not a number: {:?}", text);
            f64::NAN
        }
    }
}
