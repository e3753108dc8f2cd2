/// Keeps the first entry when the model answers with a list of colors.
pub fn first_color_segment(color_hex: &str) -> &str {
    color_hex.split(',').next().unwrap_or_default().trim()
}
