use crate::core::format::format_currency;
use crate::core::{Presenter, SspBreakdown};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Human-readable results panel.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn render_text(breakdown: &SspBreakdown) -> String {
    let rows = [
        ("Upfront License (85%)", format_currency(breakdown.upfront_license)),
        ("Total Support (15%)", format_currency(breakdown.total_support)),
        ("Monthly Support", format_currency(breakdown.monthly_support)),
        ("Contract Term", format!("{} months", breakdown.contract_term)),
    ];

    let mut text = String::from("Calculation Results\n");
    for (label, value) in rows {
        text.push_str(&format!("  {:<24}{:>20}\n", label, value));
    }
    text
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_results(&mut self, breakdown: &SspBreakdown) -> Result<()> {
        write!(self.out, "{}", render_text(breakdown))?;
        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "⚠️  {}", message)?;
        self.out.flush()?;
        Ok(())
    }

    fn clear_results(&mut self) -> Result<()> {
        writeln!(self.out, "Form cleared.")?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonResults<'a> {
    #[serde(flatten)]
    breakdown: &'a SspBreakdown,
    formatted: FormattedBreakdown,
}

#[derive(Serialize)]
struct FormattedBreakdown {
    upfront_license: String,
    total_support: String,
    monthly_support: String,
}

/// One JSON object per line, for scripting.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn show_results(&mut self, breakdown: &SspBreakdown) -> Result<()> {
        let payload = JsonResults {
            breakdown,
            formatted: FormattedBreakdown {
                upfront_license: format_currency(breakdown.upfront_license),
                total_support: format_currency(breakdown.total_support),
                monthly_support: format_currency(breakdown.monthly_support),
            },
        };
        serde_json::to_writer(&mut self.out, &payload)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &serde_json::json!({ "error": message }))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn clear_results(&mut self) -> Result<()> {
        serde_json::to_writer(&mut self.out, &serde_json::json!({ "cleared": true }))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
