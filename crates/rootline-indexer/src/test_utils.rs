//! Test utilities for the indexer

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const INDEX_TS: &str = r#"import { helper } from './util';
import _ from 'lodash';
/// <reference path="./types.d.ts" />
export const main = () => import('./lazy').then(() => helper(_));
"#;

/// Create a temporary web project with scripts, markup, styles, docs and a
/// two-file import cycle. Returns the directory guard and its canonical root.
pub fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    for dir in ["src", "public/styles", "docs", "node_modules/lodash"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }

    write(&root, "package.json", r#"{
  "name": "demo",
  "version": "1.0.0",
  "dependencies": { "lodash": "^4.17.21" }
}
"#);
    write(&root, "yarn.lock", "# yarn lockfile v1\n");
    write(&root, "LICENSE", "MIT\n");

    write(&root, "src/index.ts", INDEX_TS);
    write(&root, "src/util.ts", "import { main } from './index';\nexport const helper = (x: unknown) => main;\n");
    write(&root, "src/lazy.ts", "export default 1;\n");
    write(&root, "src/types.d.ts", "declare const VERSION: string;\n");

    write(&root, "public/index.html", r#"<!doctype html>
<html>
<head>
  <link rel="stylesheet" href="./styles/site.css">
  <script src="https://www.googletagmanager.com/gtag/js"></script>
</head>
<body>
  <img src="./logo.png" alt="logo">
</body>
</html>
"#);
    write(&root, "public/styles/site.css", "@import './reset.css';\nbody { background: url(../logo.png); }\n");
    write(&root, "public/styles/reset.css", "* { margin: 0; }\n");
    fs::write(root.join("public/logo.png"), [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]).unwrap();

    write(&root, "README.md", "# Demo\n\nSee the [guide](docs/guide.md) and [site](https://example.com).\n\n![logo](public/logo.png)\n");
    write(&root, "docs/guide.md", "# Guide\n");

    write(&root, "node_modules/lodash/index.js", "module.exports = {};\n");

    (temp_dir, root)
}

pub fn write(root: &Path, relative: &str, content: &str) {
    fs::write(root.join(relative), content).unwrap();
}
