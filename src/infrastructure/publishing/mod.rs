pub mod qiita;

pub use qiita::QiitaPublisher;
