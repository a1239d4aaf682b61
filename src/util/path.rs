use std::path::{Path, PathBuf};
use uuid::Uuid;

/// 在输出目录下生成 `<uuid>.<ext>` 形式的文件路径
///
/// 每次调用都会得到新的文件名，并发写入不会互相覆盖。
pub fn unique_output_path(base: &Path, extension: &str) -> PathBuf {
    base.join(format!("{}.{}", Uuid::new_v4(), extension))
}
