//! JavaScript/TypeScript reference extraction

use crate::config::AnalyzerConfig;
use crate::extractor::{Linkage, Reference, ReferenceExtractor};
use regex::Regex;
use rootline_core::{DependencyKind, Result};
use std::path::Path;
use std::sync::LazyLock;

/// `import x from '...'`, `import { a, b } from '...'`, `import * as ns from '...'`,
/// `import type { T } from '...'` and bare `import '...'`.
static STATIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"import\s+(?:type\s+)?(?:(?:[\w$]+|\*\s+as\s+[\w$]+|\{[^}]*\})(?:\s*,\s*(?:[\w$]+|\*\s+as\s+[\w$]+|\{[^}]*\}))*\s+from\s+)?['"]([^'"\n]+)['"]"#,
    )
    .expect("static import pattern")
});

/// `const x = require('...')`, also with `let`/`var` and destructuring.
static REQUIRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:const|let|var)\s+(?:[\w$]+|\{[^}]*\})\s*=\s*require\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#)
        .expect("require pattern")
});

static DYNAMIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#).expect("dynamic import pattern")
});

/// `/// <reference path="..." />`
static REFERENCE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"///\s*<reference\s+path\s*=\s*['"]([^'"\n]+)['"]\s*/?>"#).expect("reference directive pattern")
});

pub struct ScriptExtractor;

impl ReferenceExtractor for ScriptExtractor {
    fn extract(&self, _path: &Path, content: &str, _config: &AnalyzerConfig) -> Result<Vec<Reference>> {
        let mut references = Vec::new();

        for re in [&*STATIC_IMPORT, &*REQUIRE, &*DYNAMIC_IMPORT] {
            for caps in re.captures_iter(content) {
                references.push(Reference::new(
                    &caps[1],
                    DependencyKind::Import,
                    &caps[0],
                    Linkage::Detect,
                ));
            }
        }

        for caps in REFERENCE_DIRECTIVE.captures_iter(content) {
            references.push(Reference::new(
                &caps[1],
                DependencyKind::Reference,
                &caps[0],
                Linkage::Internal,
            ));
        }

        Ok(references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specifiers(code: &str) -> Vec<(String, DependencyKind)> {
        ScriptExtractor
            .extract(Path::new("/p/a.ts"), code, &AnalyzerConfig::default())
            .unwrap()
            .into_iter()
            .map(|r| (r.specifier, r.kind))
            .collect()
    }

    #[test]
    fn test_import_forms() {
        let code = r#"
import React from 'react';
import { useState, useEffect } from "react";
import * as utils from './utils';
import Default, { named } from './both';
import type { User } from './types';
import './polyfills';
"#;
        let found: Vec<String> = specifiers(code).into_iter().map(|(s, _)| s).collect();
        assert_eq!(found, vec!["react", "react", "./utils", "./both", "./types", "./polyfills"]);
    }

    #[test]
    fn test_require_and_dynamic_import() {
        let code = r#"
const fs = require('fs');
let { join } = require("path");
var local = require('./local');
const lazy = await import('./lazy');
"#;
        let found = specifiers(code);
        assert_eq!(
            found,
            vec![
                ("fs".to_string(), DependencyKind::Import),
                ("path".to_string(), DependencyKind::Import),
                ("./local".to_string(), DependencyKind::Import),
                ("./lazy".to_string(), DependencyKind::Import),
            ]
        );
    }

    #[test]
    fn test_reference_directive_is_internal() {
        let code = "/// <reference path=\"./globals.d.ts\" />\nexport {};\n";
        let refs = ScriptExtractor
            .extract(Path::new("/p/a.ts"), code, &AnalyzerConfig::default())
            .unwrap();

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].specifier, "./globals.d.ts");
        assert_eq!(refs[0].kind, DependencyKind::Reference);
        assert_eq!(refs[0].linkage, Linkage::Internal);
    }

    #[test]
    fn test_commented_import_still_matches() {
        // pattern matching, not parsing
        let found = specifiers("// import old from './old';\n");
        assert_eq!(found, vec![("./old".to_string(), DependencyKind::Import)]);
    }

    #[test]
    fn test_unbound_require_is_ignored() {
        assert!(specifiers("require('./side-effect');\n").is_empty());
    }
}
