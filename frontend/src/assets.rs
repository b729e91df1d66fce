/// A file shipped in the site's static directory, served from the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAsset {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const LOGO: StaticAsset = StaticAsset {
    path: "/images/logo.svg",
    width: 100,
    height: 100,
};
