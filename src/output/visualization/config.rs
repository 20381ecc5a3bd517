//! Plot configuration shared across visualization modules
//!
//! Common configuration used by both the full thermogram (every node's
//! history) and the single outlet plots.

use plotters::prelude::*;

/// Marker for an untitled plot: `PlotConfig::thermogram(NO_TITLE)`
pub const NO_TITLE: Option<&str> = None;

/// Default palette used when no per-node colors are configured
///
/// Ten visually distinct colors; node curves cycle through it when the
/// mesh has more nodes than the palette has entries.
const DEFAULT_PALETTE: [RGBColor; 10] = [
    RED,
    BLUE,
    GREEN,
    MAGENTA,
    CYAN,
    RGBColor(255, 165, 0),  // orange
    RGBColor(128, 0, 128),  // purple
    RGBColor(165, 42, 42),  // brown
    RGBColor(0, 128, 128),  // teal
    RGBColor(100, 100, 100), // grey
];

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: dimensions in pixels
/// - `title`: plot title
/// - `xlabel`, `ylabel`: axis labels
/// - `line_color`: line color for single-curve plots
/// - `node_colors`: optional per-node colors for thermograms
/// - `background`: background color
/// - `line_width`: line thickness in pixels
/// - `show_grid`: whether to draw grid lines
///
/// # Example
///
/// ```rust,ignore
/// use radiator_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::thermogram("Lenhovda MP 25 500 step response");
/// config.width = 1920;
/// config.height = 1080;
/// config.line_width = 1;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: set by the plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Temperature (°C)")
    pub ylabel: String,

    /// Line color for single-curve plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for thermogram node curves, one per node
    ///
    /// If `None`, the built-in ten-color palette is cycled.
    pub node_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: "Temperature (°C)".to_string(),
            line_color: RED,
            node_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Configuration preset for a full thermogram (all node histories)
    pub fn thermogram(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Radiator temperature history".to_string()),
            xlabel: "Time (min)".to_string(),
            line_width: 1,
            ..Default::default()
        }
    }

    /// Configuration preset for a single outlet curve
    pub fn outlet(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Outlet temperature".to_string()),
            xlabel: "Time (min)".to_string(),
            ..Default::default()
        }
    }

    /// Color for node curve `node`, from `node_colors` or the palette
    pub fn get_node_color(&self, node: usize) -> RGBColor {
        match &self.node_colors {
            Some(colors) if !colors.is_empty() => colors[node % colors.len()],
            _ => DEFAULT_PALETTE[node % DEFAULT_PALETTE.len()],
        }
    }
}

/// Helper trait to accept `&str`, `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(IntoOptionalTitle::into_optional_title)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let config = PlotConfig::default();
        assert_eq!(config.ylabel, "Temperature (°C)");
        assert_eq!(config.width, 1024);
    }

    #[test]
    fn test_thermogram_preset() {
        let config = PlotConfig::thermogram("Step response");
        assert_eq!(config.title, "Step response");
        assert_eq!(config.xlabel, "Time (min)");
        assert_eq!(config.line_width, 1);
    }

    #[test]
    fn test_no_title_uses_preset_default() {
        let config = PlotConfig::thermogram(NO_TITLE);
        assert_eq!(config.title, "Radiator temperature history");
    }

    #[test]
    fn test_palette_cycles() {
        let config = PlotConfig::default();
        assert_eq!(config.get_node_color(0), config.get_node_color(10));
    }

    #[test]
    fn test_custom_node_colors() {
        let mut config = PlotConfig::default();
        config.node_colors = Some(vec![BLACK, WHITE]);
        assert_eq!(config.get_node_color(0), BLACK);
        assert_eq!(config.get_node_color(3), WHITE);
    }
}
