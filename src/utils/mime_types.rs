//! 텍스트 MIME 타입 허용 목록
//!
//! 파일 내용을 텍스트로 반환/편집할 수 있는지 판단합니다. 허용 목록에 있거나
//! `text/` 로 시작하는 타입이면 텍스트로 취급합니다. 소스 코드 타입은 배포판과
//! 브라우저마다 `text/x-*` 와 `application/x-*` 두 가지 이름이 섞여 쓰이므로
//! 양쪽을 모두 등록합니다.

use std::collections::HashSet;

use once_cell::sync::Lazy;

static TEXT_MIME_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // 일반 텍스트 / 마크업
        "text/plain",
        "text/markdown",
        "text/x-markdown",
        "text/html",
        "text/css",
        "text/csv",
        "text/tab-separated-values",
        "text/xml",
        "text/rtf",
        "text/richtext",
        "text/calendar",
        "text/vcard",
        "text/x-rst",
        "text/x-asciidoc",
        "text/x-org",
        "text/x-tex",
        "text/x-latex",
        "text/troff",
        "application/xhtml+xml",
        "application/rtf",
        "application/x-tex",
        "application/x-latex",
        "application/x-markdown",
        // 데이터 / 설정 형식
        "application/json",
        "application/ld+json",
        "application/manifest+json",
        "application/geo+json",
        "application/xml",
        "application/atom+xml",
        "application/rss+xml",
        "application/soap+xml",
        "application/yaml",
        "application/x-yaml",
        "text/yaml",
        "text/x-yaml",
        "application/toml",
        "application/x-toml",
        "text/x-toml",
        "application/x-ini",
        "text/x-ini",
        "application/x-properties",
        "text/x-properties",
        "application/x-ndjson",
        "application/graphql",
        "application/sql",
        "application/x-sql",
        "text/x-sql",
        "image/svg+xml",
        "application/x-subrip",
        "text/vtt",
        // 스크립트
        "application/javascript",
        "application/x-javascript",
        "application/ecmascript",
        "text/javascript",
        "text/ecmascript",
        "application/typescript",
        "application/x-typescript",
        "text/typescript",
        "text/x-typescript",
        "application/x-sh",
        "application/x-shellscript",
        "text/x-sh",
        "text/x-shellscript",
        "application/x-csh",
        "text/x-csh",
        "application/x-zsh",
        "application/x-powershell",
        "text/x-powershell",
        "application/x-bat",
        "text/x-bat",
        "application/x-msdos-program",
        "application/x-python",
        "application/x-python-code",
        "text/x-python",
        "text/x-python3",
        "application/x-ruby",
        "text/x-ruby",
        "application/x-perl",
        "text/x-perl",
        "application/x-php",
        "application/x-httpd-php",
        "text/x-php",
        "application/x-lua",
        "text/x-lua",
        "application/x-tcl",
        "text/x-tcl",
        "application/x-awk",
        "text/x-awk",
        "application/x-r",
        "text/x-r",
        "text/x-rsrc",
        "application/x-julia",
        "text/x-julia",
        // 컴파일 언어
        "text/x-c",
        "text/x-csrc",
        "text/x-chdr",
        "application/x-c",
        "text/x-c++",
        "text/x-c++src",
        "text/x-c++hdr",
        "application/x-c++",
        "text/x-csharp",
        "application/x-csharp",
        "text/x-java",
        "text/x-java-source",
        "application/x-java",
        "application/x-java-source",
        "text/x-kotlin",
        "application/x-kotlin",
        "text/x-scala",
        "application/x-scala",
        "text/x-groovy",
        "application/x-groovy",
        "text/x-go",
        "application/x-go",
        "text/x-rust",
        "application/x-rust",
        "text/rust",
        "text/x-swift",
        "application/x-swift",
        "text/x-objective-c",
        "text/x-objcsrc",
        "application/x-objective-c",
        "text/x-dart",
        "application/x-dart",
        "application/dart",
        "text/x-haskell",
        "application/x-haskell",
        "text/x-literate-haskell",
        "text/x-ocaml",
        "application/x-ocaml",
        "text/x-fsharp",
        "application/x-fsharp",
        "text/x-erlang",
        "application/x-erlang",
        "text/x-elixir",
        "application/x-elixir",
        "text/x-clojure",
        "application/x-clojure",
        "text/x-common-lisp",
        "application/x-lisp",
        "text/x-scheme",
        "application/x-scheme",
        "text/x-elm",
        "application/x-elm",
        "text/x-pascal",
        "application/x-pascal",
        "text/x-fortran",
        "application/x-fortran",
        "text/x-cobol",
        "application/x-cobol",
        "text/x-ada",
        "application/x-ada",
        "text/x-d",
        "application/x-d",
        "text/x-nim",
        "application/x-nim",
        "text/x-zig",
        "application/x-zig",
        "text/x-crystal",
        "application/x-crystal",
        "text/x-vb",
        "text/x-vbnet",
        "application/x-vb",
        "text/x-matlab",
        "application/x-matlab",
        "text/x-octave",
        "text/x-asm",
        "application/x-asm",
        "text/x-nasm",
        "text/x-verilog",
        "text/x-vhdl",
        "text/x-solidity",
        "application/x-solidity",
        "application/wasm-text",
        // 웹 / 템플릿
        "text/x-scss",
        "text/x-sass",
        "text/x-less",
        "application/x-scss",
        "application/x-sass",
        "application/x-less",
        "text/x-vue",
        "application/x-vue",
        "text/x-svelte",
        "text/jsx",
        "text/x-jsx",
        "application/x-jsx",
        "text/tsx",
        "text/x-tsx",
        "application/x-tsx",
        "text/x-handlebars-template",
        "text/x-mustache",
        "text/x-jinja",
        "text/x-twig",
        "text/x-liquid",
        "text/x-ejs",
        "text/x-pug",
        // 빌드 / 도구 설정
        "text/x-makefile",
        "application/x-makefile",
        "text/x-cmake",
        "application/x-cmake",
        "text/x-dockerfile",
        "application/x-dockerfile",
        "text/x-nginx-conf",
        "text/x-diff",
        "text/x-patch",
        "application/x-diff",
        "application/x-patch",
        "text/x-gradle",
        "application/x-gradle",
        "text/x-protobuf",
        "application/x-protobuf-text",
        "text/x-thrift",
        "text/x-terraform",
        "application/x-terraform",
        "application/x-hcl",
        "text/x-hcl",
        "text/x-nix",
        "text/x-log",
        "application/x-empty",
    ]
    .into_iter()
    .collect()
});

/// MIME 타입이 텍스트로 다룰 수 있는 형식인지 판단합니다.
///
/// `; charset=...` 같은 파라미터는 무시하고 대소문자를 구분하지 않습니다.
///
/// ```rust,ignore
/// assert!(is_text_like("text/anything"));
/// assert!(is_text_like("application/json; charset=utf-8"));
/// assert!(!is_text_like("application/pdf"));
/// ```
pub fn is_text_like(mime_type: &str) -> bool {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence.is_empty() {
        return false;
    }

    TEXT_MIME_TYPES.contains(essence.as_str()) || essence.starts_with("text/")
}
