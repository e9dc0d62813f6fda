use tracing::{error, info};

use crate::error::{Error, Result};
use crate::io::prompt::InputProvider;
use crate::types::Library;

/// List `libraries` and let the user pick one by its 1-based number.
///
/// A single bad answer is fatal; there is no retry.
pub fn select_library<'a>(
    libraries: &'a [Library],
    input: &mut dyn InputProvider,
) -> Result<&'a Library> {
    info!("Available calibre libraries:");
    for (index, library) in libraries.iter().enumerate() {
        info!("{}. {}", index + 1, library);
    }

    let answer = input.read_line(&format!("Select a library [1-{}]: ", libraries.len()))?;
    let selected = parse_selection(&answer, libraries.len())
        .map(|index| &libraries[index])
        .ok_or_else(|| Error::InvalidSelection {
            input: answer.trim().to_string(),
            count: libraries.len(),
        });

    match &selected {
        Ok(library) => info!("Selected library: {}", library),
        Err(e) => error!("{e}"),
    }
    selected
}

/// Zero-based index for a 1-based answer within `1..=count`.
fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    let number: usize = answer.trim().parse().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}
