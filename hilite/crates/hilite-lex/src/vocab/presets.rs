//! Built-in vocabularies.
//!
//! These are plain data for callers to opt into. The lexer never consults
//! them on its own.

use super::Vocabulary;

/// Names accepted by [`preset`].
pub const PRESET_NAMES: &[&str] = &["cpp", "crt", "cpp+crt", "default"];

/// C, C++ and HLSL keywords as they appear in the emulation library and
/// its shaders.
const CPP_KEYWORDS: &[&str] = &[
    // C/C++
    "alignas", "alignof", "auto", "bool", "break", "case", "catch", "char", "class", "const",
    "constexpr", "const_cast", "continue", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept",
    "nullptr", "operator", "private", "protected", "public", "register", "reinterpret_cast",
    "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast", "struct",
    "switch", "template", "this", "throw", "true", "try", "typedef", "typename", "union",
    "unsigned", "using", "virtual", "void", "volatile", "while", "override", "final",
    // fixed-width integer typedefs used throughout the library
    "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
    "size_t",
    // HLSL
    "cbuffer", "float2", "float3", "float4", "float4x4", "half", "in", "inout", "out", "uint",
    "uint2", "uint3", "uint4", "int2", "int3", "int4", "lerp", "saturate", "sampler",
    "SamplerState", "Texture2D", "RWTexture2D", "groupshared", "numthreads",
];

/// Public type names of the CRT/NTSC emulation library.
const CRT_TYPE_NAMES: &[&str] = &[
    "ArtifactSettings", "AspectData", "CGAEmulationType", "CGAInputType", "CommonConstants",
    "CompositeToSVideo", "D3D11GraphicsDevice", "FilterRGB", "GraphicsDevice", "ITexture",
    "LoadedTexture", "OverscanSettings", "PixelShader", "ProcessContext", "RGBToCRT",
    "RGBToSVideoOrComposite", "RGBToScanlineRGB", "SVideoToComposite", "SVideoToYIQ",
    "ScanlineType", "ScreenSettings", "SignalDecoder", "SignalGenerator", "SignalLevels",
    "SignalProperties", "SignalType", "SimpleArray", "SourceSettings", "TVKnobSettings",
    "Texture", "TextureFlags", "Vertex", "YIQToRGB",
];

/// Builds a vocabulary of C/C++/HLSL keywords.
pub fn cpp_keywords() -> Vocabulary {
    Vocabulary::new().with_keywords(CPP_KEYWORDS.iter().copied())
}

/// Builds a vocabulary of the emulation library's type names.
pub fn crt_type_names() -> Vocabulary {
    Vocabulary::new().with_type_names(CRT_TYPE_NAMES.iter().copied())
}

/// Looks up a preset by name.
///
/// `"default"` is an alias for `"cpp+crt"`. Returns `None` for unknown names.
///
/// # Example
///
/// ```
/// use hilite_lex::presets::preset;
/// use hilite_lex::TokenCategory;
///
/// let vocabulary = preset("default").unwrap();
/// assert_eq!(vocabulary.classify("struct"), TokenCategory::Keyword);
/// assert_eq!(vocabulary.classify("ScreenSettings"), TokenCategory::TypeName);
/// assert!(preset("cobol").is_none());
/// ```
pub fn preset(name: &str) -> Option<Vocabulary> {
    match name {
        "cpp" => Some(cpp_keywords()),
        "crt" => Some(crt_type_names()),
        "cpp+crt" | "default" => {
            let mut vocabulary = cpp_keywords();
            vocabulary.extend(&crt_type_names());
            Some(vocabulary)
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenCategory;

    #[test]
    fn test_every_listed_name_resolves() {
        for name in PRESET_NAMES {
            assert!(preset(name).is_some(), "preset {name} missing");
        }
    }

    #[test]
    fn test_presets_do_not_overlap() {
        let types = crt_type_names();
        let keywords = cpp_keywords();
        assert!(types.type_names().all(|t| !keywords.is_keyword(t)));
    }

    #[test]
    fn test_cpp_only_has_no_type_names() {
        let vocabulary = preset("cpp").unwrap();
        assert_eq!(vocabulary.type_name_count(), 0);
        assert_eq!(vocabulary.classify("RGBToCRT"), TokenCategory::Identifier);
    }

    #[test]
    fn test_default_is_union() {
        let vocabulary = preset("default").unwrap();
        assert_eq!(vocabulary, preset("cpp+crt").unwrap());
        assert_eq!(vocabulary.keyword_count(), cpp_keywords().keyword_count());
        assert_eq!(vocabulary.type_name_count(), crt_type_names().type_name_count());
    }
}
