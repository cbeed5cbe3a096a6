use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use labbook::{Evaluation, LineOutcome, Warning};

/// Format every dropped line and numeric fallback of an evaluation with Ariadne.
///
/// `source_id` names the document in the report headers; `document` must be
/// the exact text that produced `evaluation` so spans line up.
pub fn format_diagnostics(
    source_id: &str,
    document: &str,
    evaluation: &Evaluation,
    color: bool,
) -> String {
    let source_id = source_id.to_string();
    let mut output = String::new();

    for line in evaluation.dropped() {
        output.push_str(&format_dropped_line(&source_id, document, line, color));
    }
    for warning in &evaluation.warnings {
        output.push_str(&format_warning(&source_id, document, warning, color));
    }

    output
}

fn format_dropped_line(
    source_id: &String,
    document: &str,
    line: &LineOutcome,
    color: bool,
) -> String {
    let message = line
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "line dropped".to_string());
    let label = match &line.status {
        labbook::LineStatus::Dropped {
            name: Some(name), ..
        } => format!("'{}' is not bound", name),
        _ => "ignored".to_string(),
    };

    render(
        ReportKind::Error,
        Color::Red,
        source_id,
        document,
        line.span,
        format!("line {}: {}", line.span.line, message),
        label,
        color,
    )
}

fn format_warning(source_id: &String, document: &str, warning: &Warning, color: bool) -> String {
    let span = warning.span();
    render(
        ReportKind::Warning,
        Color::Yellow,
        source_id,
        document,
        span,
        format!("line {}: {}", span.line, warning.message()),
        "read as 0".to_string(),
        color,
    )
}

#[allow(clippy::too_many_arguments)]
fn render(
    kind: ReportKind,
    label_color: Color,
    source_id: &String,
    document: &str,
    span: labbook::Span,
    message: String,
    label: String,
    color: bool,
) -> String {
    let mut output = Vec::new();

    // Ariadne counts characters, spans count bytes
    let start = char_offset(document, span.start);
    let end = char_offset(document, span.end);

    let report = Report::build(kind, source_id, start)
        .with_config(Config::default().with_color(color))
        .with_message(&message)
        .with_label(
            Label::new((source_id, start..end))
                .with_message(label)
                .with_color(label_color),
        );

    match report
        .finish()
        .write((source_id, Source::from(document)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        // Fall back to the plain message
        Err(_) => format!("{}\n", message),
    }
}

fn char_offset(document: &str, byte_offset: usize) -> usize {
    document
        .get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| document.chars().count())
}
