pub mod youtube;

/// One stream as reported by the resolver, reduced to the traits the
/// selection query cares about.
pub struct Representation {
    pub index: usize,
    pub progressive: bool,
    pub mp4: bool,
    pub height: Option<u64>,
}

/// Picks the highest-resolution progressive MP4 representation, if any.
/// Streams without a reported height sort below every stream with one.
pub fn best_progressive_mp4(representations: &[Representation]) -> Option<usize> {
    representations
        .iter()
        .filter(|r| r.progressive && r.mp4)
        .max_by_key(|r| r.height.unwrap_or(0))
        .map(|r| r.index)
}
