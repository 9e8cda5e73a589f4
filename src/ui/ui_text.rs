use std::sync::LazyLock;

// Glyph from egui's bundled emoji font
pub const ICON_DICE: &str = "🎲";

pub struct UiText {
    // --- Toolbar ---
    pub tb_asset: String,
    pub tb_range: String,
    pub tb_simulated: String,
    pub tb_randomize: String,
    pub tb_renderer: String,

    // --- Legend ---
    pub legend_heading: String,
    pub legend_hint: String,

    // --- Plot ---
    pub plot_title: String,
    pub plot_y_axis: String,
    pub plot_x_axis: String,

    // --- Central panel ---
    pub cp_simulation_off: String,
    pub cp_no_points: String,

    // --- Status bar ---
    pub sb_points: String,
    pub sb_seed: String,
    pub sb_visible: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    tb_asset: "Asset".to_string(),
    tb_range: "Range".to_string(),
    tb_simulated: "Simulated data".to_string(),
    tb_randomize: ICON_DICE.to_string() + " Randomize",
    tb_renderer: "Renderer".to_string(),

    legend_heading: "Exchanges".to_string(),
    legend_hint: "Click to show or hide".to_string(),

    plot_title: "Historical Funding Rates".to_string(),
    plot_y_axis: "Funding (bps)".to_string(),
    plot_x_axis: "Time".to_string(),

    cp_simulation_off: "Simulated data is off. Nothing to show.".to_string(),
    cp_no_points: "The selected window holds no points.".to_string(),

    sb_points: "Points".to_string(),
    sb_seed: "Seed".to_string(),
    sb_visible: "Visible".to_string(),
});
