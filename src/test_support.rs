// テスト用の計測付きダブル
// 並列数や通知順序など、mockallでは表現しにくい性質の検証に使う

use crate::core::{ImageCodec, ProgressReporter, SourceFormat};
use async_trait::async_trait;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// デコードに渡されたバイト列がこの値で始まると失敗する
pub const FAIL_MARKER: &[u8] = b"fail";

/// デコードに渡されたバイト列がこの値で始まるとパニックする
pub const PANIC_MARKER: &[u8] = b"panic";

/// 同時実行数と処理順序を記録するコーデック
#[derive(Debug, Default)]
pub struct InstrumentedCodec {
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    decoded: Mutex<Vec<Vec<u8>>>,
}

impl InstrumentedCodec {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    /// 観測された最大同時実行数
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// デコードされた入力を開始順に返す
    pub fn decoded_inputs(&self) -> Vec<Vec<u8>> {
        self.decoded.lock().unwrap().clone()
    }
}

impl ImageCodec for InstrumentedCodec {
    fn decode(&self, data: &[u8], _format: SourceFormat) -> anyhow::Result<DynamicImage> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        self.decoded.lock().unwrap().push(data.to_vec());

        std::thread::sleep(self.delay);

        if data.starts_with(PANIC_MARKER) {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            panic!("instrumented codec panic");
        }
        if data.starts_with(FAIL_MARKER) {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            anyhow::bail!("instrumented decode failure");
        }

        Ok(DynamicImage::new_rgb8(1, 1))
    }

    fn encode(&self, _image: &DynamicImage, _quality: u8, _lossless: bool) -> anyhow::Result<Vec<u8>> {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(b"RIFF\0\0\0\0WEBP".to_vec())
    }

    fn codec_name(&self) -> &'static str {
        "instrumented"
    }
}

/// 通知内容を到着順に記録するレポーター
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Started(usize),
    Progress(usize, usize),
    Status(String),
    Error(PathBuf),
    Completed(usize, usize),
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn progress_counts(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Progress(completed, _) => Some(completed),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Status(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn error_paths(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Error(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressReporter for RecordingReporter {
    async fn report_started(&self, total_files: usize) {
        self.push(ReportEvent::Started(total_files));
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.push(ReportEvent::Progress(completed, total));
    }

    async fn report_status(&self, message: &str) {
        self.push(ReportEvent::Status(message.to_string()));
    }

    async fn report_error(&self, file_path: &Path, _error: &str) {
        self.push(ReportEvent::Error(file_path.to_path_buf()));
    }

    async fn report_completed(&self, total_completed: usize, total_failed: usize) {
        self.push(ReportEvent::Completed(total_completed, total_failed));
    }
}
