use log::debug;

pub const WRONG_INPUT_MESSAGE: &str =
    "Erm... excuse me little elf, but those don't look like cubes.";

// Name -> contents of every resource compiled into the binary.
static BUNDLED: &[(&str, &str)] = &[("input", include_str!("../resources/input"))];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ResourceError {
    #[error("{}", WRONG_INPUT_MESSAGE)]
    NotFound,
}

pub fn lookup(name: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(bundled, _)| *bundled == name)
        .map(|(_, contents)| *contents)
}

/// Reads the named bundled resource as one string per line, in file order.
pub fn extract_lines(name: &str) -> Result<Vec<String>, ResourceError> {
    let Some(contents) = lookup(name) else {
        debug!("no bundled resource named {name:?}");
        return Err(ResourceError::NotFound);
    };
    let lines = split_lines(contents);
    debug!("read {} lines from resource {name:?}", lines.len());
    Ok(lines)
}

fn split_lines(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}
