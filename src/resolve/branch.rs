use crate::error::ResolveError;
use globset::GlobBuilder;

/// Pick the speculative base branch for `current` from `candidates`
/// (highest priority first).
///
/// A candidate matching the current branch means the branch already is a
/// designated stage and becomes its own base; when nothing matches, the
/// first candidate is the fallback. An empty list yields no base at all.
pub fn find_speculative_base_branch(
    current: &str,
    candidates: &[String],
) -> Result<Option<String>, ResolveError> {
    for pattern in candidates {
        // literal_separator keeps `*` within one path segment; `**` still
        // crosses segments, matching minimatch-style branch patterns
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| ResolveError::Pattern {
                pattern: pattern.clone(),
                source: e,
            })?
            .compile_matcher();

        if matcher.is_match(current) {
            return Ok(Some(current.to_string()));
        }
    }

    Ok(candidates.first().cloned())
}
