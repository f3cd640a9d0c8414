// 画像変換機能
// 単一画像ファイルの読み込み、デコード、WebPエンコード、書き込み

pub mod worker;

// 公開API
pub use worker::convert_single_file;
