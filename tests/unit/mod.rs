//! Unit tests mirroring the `src/` tree file by file
