use ph_strip_common::AnalysisResult;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    Manual,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub tab: Tab,
    /// Last analyzed image, if any
    pub image_path: Option<PathBuf>,
    pub result: Option<AnalysisResult>,
    pub manual_color: [u8; 3],
    pub manual_result: Option<AnalysisResult>,
    pub analyzing: bool,
    /// Monotonic id for in-flight analyses; stale completions are dropped
    pub generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            image_path: None,
            result: None,
            manual_color: [255, 255, 255],
            manual_result: None,
            analyzing: false,
            generation: 0,
        }
    }
}
