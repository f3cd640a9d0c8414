// コーデックアダプター
// 入力形式のデコードとWebPエンコードの具象実装

pub mod standard;

pub use standard::WebpCodec;
