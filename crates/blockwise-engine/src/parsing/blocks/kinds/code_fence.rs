/// Code fence block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True if `s` opens (or closes) a fenced code region.
    ///
    /// Any line starting with the fence matches, including opening fences
    /// carrying an info string such as ```` ```rust ````.
    pub fn matches(s: &str) -> bool {
        s.trim_end_matches(['\r', '\n']).starts_with(Self::FENCE)
    }
}
