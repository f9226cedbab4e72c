// Command-line settings. Everything has a default, so plain `locus-visualizer` just works.

use clap::Parser;

/// Locus Visualizer: interactive k-nearest / master-point distance field
#[derive(Parser, Debug, Clone)]
#[command(name = "locus-visualizer", version, about)]
pub struct Settings {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280, value_parser = clap::value_parser!(u32).range(64..))]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720, value_parser = clap::value_parser!(u32).range(64..))]
    pub height: u32,

    /// Frame rate cap
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Shading threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Multiplier turning the platform's wheel delta into notches
    #[arg(long, default_value_t = 1.0)]
    pub wheel_scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::try_parse_from(["locus-visualizer"]).expect("parse");
        assert_eq!((s.width, s.height, s.fps, s.threads), (1280, 720, 60, 0));
        assert_eq!(s.wheel_scale, 1.0);
    }

    #[test]
    fn overrides_and_bounds() {
        let s = Settings::try_parse_from(["lv", "--width", "800", "--threads", "4", "--wheel-scale", "0.5"])
            .expect("parse");
        assert_eq!(s.width, 800);
        assert_eq!(s.threads, 4);
        assert_eq!(s.wheel_scale, 0.5);

        assert!(Settings::try_parse_from(["lv", "--height", "10"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Settings::command().debug_assert();
    }
}
