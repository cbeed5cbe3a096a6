use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use labbook::{format_measurement, Evaluation, SymbolTable};
use serde::Serialize;

/// A bound name as it appears in JSON output
#[derive(Debug, Serialize)]
pub struct VariableJson {
    pub name: String,
    pub value: f64,
    pub uncertainty: f64,
    pub display: String,
}

pub fn variables_json(symbols: &SymbolTable) -> Vec<VariableJson> {
    symbols
        .iter()
        .map(|(name, m)| VariableJson {
            name: name.to_string(),
            value: m.value,
            uncertainty: m.uncertainty,
            display: format_measurement(m),
        })
        .collect()
}

/// Per-file counts shown by `labbook list`
pub struct DocumentStats {
    pub path: String,
    pub variables: usize,
    pub dropped: usize,
    pub warnings: usize,
}

impl DocumentStats {
    pub fn from_evaluation(path: String, evaluation: &Evaluation) -> Self {
        Self {
            path,
            variables: evaluation.symbols.len(),
            dropped: evaluation.dropped().count(),
            warnings: evaluation.warnings.len(),
        }
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Render a symbol table.
    ///
    /// `raw` prints one `name = value ± uncertainty` line per binding for
    /// piping; otherwise a table is drawn.
    pub fn format_symbols(&self, symbols: &SymbolTable, raw: bool) -> String {
        if raw {
            return symbols
                .formatted()
                .into_iter()
                .map(|(name, value)| format!("{} = {}\n", name, value))
                .collect();
        }

        if symbols.is_empty() {
            return "No measurements defined\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Name").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Right),
        ]));

        for (name, value) in symbols.formatted() {
            table.add_row(Row::from(vec![
                Cell::new(name),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }

    pub fn format_json(&self, symbols: &SymbolTable) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&variables_json(symbols))
    }

    pub fn format_workspace_summary(&self, stats: &[DocumentStats]) -> String {
        let mut output = String::new();
        output.push_str(&format!("Workspace contains {} notebook(s)\n", stats.len()));

        if stats.is_empty() {
            return output;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            "Notebook", "Variables", "Dropped", "Warnings",
        ]));
        for stat in stats {
            table.add_row(Row::from(vec![
                stat.path.clone(),
                stat.variables.to_string(),
                stat.dropped.to_string(),
                stat.warnings.to_string(),
            ]));
        }

        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');
        output
    }
}
