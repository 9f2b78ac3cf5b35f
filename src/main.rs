// SPDX-License-Identifier: MIT
//
// ev-contrast — check a text/background color pair against WCAG and APCA.
//
// This is the command-line shell around the library crates:
//
//   ev-color   → sRGB, hex, HSL, linear light
//   ev-guard   → validation and sanitization of untrusted input
//   ev-metrics → WCAG ratio, APCA Lc, and the check_contrast facade
//
// Flags become a ContrastRequest, which flows through:
//
//   clap → ContrastRequest → check_contrast → ContrastResult → report / JSON
//
// Nothing the user types is an error. Rejected values fall back to the
// facade's defaults (run with RUST_LOG=ev_metrics=debug to see which).
// The exit status answers the question: 0 if the pair meets the requested
// level, 1 if it doesn't.

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ev_color::hex_to_rgb;
use ev_guard::{ColorInput, Level};
use ev_metrics::checker::DEFAULT_LEVEL;
use ev_metrics::{
    ContrastRequest, ContrastResult, check_contrast, required_apca_contrast,
    required_contrast_ratio,
};

#[derive(Parser)]
#[command(name = "ev-contrast")]
#[command(about = "Check text/background contrast against WCAG 2.x and APCA")]
struct Cli {
    /// Text color: hex (#767676, fff) or an r,g,b triple (118,118,118)
    #[arg(short, long, value_name = "COLOR", value_parser = ColorInput::from_str)]
    fg: Option<ColorInput>,

    /// Background color, same forms as --fg
    #[arg(short, long, value_name = "COLOR", value_parser = ColorInput::from_str)]
    bg: Option<ColorInput>,

    /// Font size in pixels (8-96)
    #[arg(short, long, value_name = "PX", default_value_t = 16.0)]
    size: f64,

    /// Text is bold
    #[arg(long)]
    bold: bool,

    /// Conformance level to check: AA or AAA
    #[arg(short, long, default_value_t = DEFAULT_LEVEL.to_string())]
    level: String,

    /// Print the result as JSON instead of a report
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_request(self) -> ContrastRequest {
        let defaults = ContrastRequest::default();
        ContrastRequest {
            foreground: self.fg.unwrap_or(defaults.foreground),
            background: self.bg.unwrap_or(defaults.background),
            ..defaults
        }
        .with_font(self.size, self.bold)
        .with_level(self.level)
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ev_contrast=warn,ev_metrics=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    let request = cli.into_request();
    tracing::debug!(?request, "checking contrast");
    let result = check_contrast(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report(&result)?);
    }

    Ok(if result.meets_required() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

// ─── Report ─────────────────────────────────────────────────────────────────

fn mark(pass: bool) -> &'static str {
    if pass { "pass" } else { "FAIL" }
}

fn report(result: &ContrastResult) -> Result<String> {
    use std::fmt::Write;

    let fg = hex_to_rgb(&result.foreground)?;
    let bg = hex_to_rgb(&result.background)?;
    let font = result.font;
    let size = f64::from(font.size);
    let large = font.is_large_text();

    let mut out = String::new();
    writeln!(out, "Foreground  {}  {}  {}", result.foreground, fg, fg.to_hsl())?;
    writeln!(out, "Background  {}  {}  {}", result.background, bg, bg.to_hsl())?;
    writeln!(
        out,
        "Font        {}px{}{}",
        font.size,
        if font.bold { " bold" } else { "" },
        if large { " (large text)" } else { "" }
    )?;
    writeln!(out)?;

    let wcag = &result.wcag;
    writeln!(out, "WCAG 2.x    {:.2}:1", wcag.ratio)?;
    for level in Level::ALL {
        writeln!(
            out,
            "  {level:<3}  normal {} (≥ {}:1)  large {} (≥ {}:1)",
            mark(wcag.passes(level, false)),
            required_contrast_ratio(level, false),
            mark(wcag.passes(level, true)),
            required_contrast_ratio(level, true),
        )?;
    }
    writeln!(out)?;

    let apca = &result.apca;
    writeln!(out, "APCA        Lc {:.1}", apca.contrast)?;
    for level in Level::ALL {
        writeln!(
            out,
            "  {level:<3}  {} (|Lc| ≥ {})",
            mark(apca.passes(level)),
            required_apca_contrast(size, font.bold, level),
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{}: {} on {} at {}",
        if result.meets_required() { "PASS" } else { "FAIL" },
        result.foreground,
        result.background,
        result.level,
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_guard::RawRgb;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ev-contrast").chain(args.iter().copied()))
    }

    #[test]
    fn no_flags_is_the_default_request() {
        assert_eq!(cli(&[]).into_request(), ContrastRequest::default());
    }

    #[test]
    fn flags_reach_the_request() {
        let args = ["--fg", "118,118,118", "--bg", "#fff", "-s", "24", "--bold", "-l", "aaa"];
        let request = cli(&args).into_request();
        let result = check_contrast(&request);
        assert_eq!(result.foreground, "#767676");
        assert_eq!(result.background, "#FFFFFF");
        assert_eq!(result.font.size, 24);
        assert!(result.font.bold);
        assert_eq!(result.level, Level::AAA);
    }

    #[test]
    fn comma_separated_color_is_a_triple() {
        let parsed = cli(&["--fg", "118,118,118", "-b", "0, 0, 255"]);
        assert_eq!(parsed.fg, Some(ColorInput::Rgb(RawRgb::new("118", "118", "118"))));
        assert_eq!(parsed.bg, Some(ColorInput::Rgb(RawRgb::new("0", " 0", " 255"))));

        let result = check_contrast(&parsed.into_request());
        assert_eq!(result.foreground, "#767676");
        assert_eq!(result.background, "#0000FF");
    }

    #[test]
    fn hex_color_stays_hex() {
        assert_eq!(cli(&["--fg", "#fff"]).fg, Some(ColorInput::Hex("#fff".to_owned())));
    }

    #[test]
    fn report_names_both_metrics() {
        let result = check_contrast(&ContrastRequest::new("#767676", "#FFFFFF"));
        let text = report(&result).unwrap();
        assert!(text.contains("hsl(0, 0%, 46%)"), "{text}");
        assert!(text.contains("4.54:1"), "{text}");
        assert!(text.contains("Lc -7"), "{text}");
        assert!(text.starts_with("Foreground  #767676"), "{text}");
        assert!(text.contains("FAIL: #767676 on #FFFFFF at AA"), "{text}");
    }
}
