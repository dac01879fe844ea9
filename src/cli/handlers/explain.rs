//! Explain command handler.

use anyhow::Result;

use super::print_json;
use crate::cli::ExplainArgs;
use crate::cli::output::{Explanation, OutputFormat};
use crate::matching::{Normalizer, QuantityExtractor};

/// Runs the normalizer and extractor over `text` (pure function, no I/O).
pub fn explain_text(text: &str) -> Explanation {
    let stems = Normalizer::new().split_to_stems(text);
    let quantities = QuantityExtractor::new().find_quantities(text);
    Explanation {
        text: text.to_string(),
        stems: stems.into_iter().collect(),
        quantities,
    }
}

pub fn handle_explain(args: &ExplainArgs) -> Result<()> {
    let explanation = explain_text(&args.text);

    match args.format {
        OutputFormat::Human => {
            println!("Stems: {}", explanation.stems.join(", "));
            let quantities: Vec<String> = explanation
                .quantities
                .iter()
                .map(|q| format!("{} {}", q.value(), q.unit()))
                .collect();
            println!("Quantities: {}", quantities.join(", "));
        }
        OutputFormat::Json => print_json(explanation)?,
    }

    Ok(())
}
