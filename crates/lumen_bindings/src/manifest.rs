//! Declared binding table
//!
//! The list of imports a script module may request from `env`, with their
//! wasm value types. Hosts can dump it as JSON and check it against their
//! linker before instantiating a module.

use crate::error::Result;
use serde::Serialize;

/// Wasm value type of a binding parameter or result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValType {
    I32,
    F64,
}

/// One declared host function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BindingDecl {
    /// Import name, `<Class>_<method>`
    pub symbol: &'static str,
    /// Parameter types, receiver handle first
    pub params: &'static [ValType],
    pub result: Option<ValType>,
}

impl BindingDecl {
    /// Class part of the symbol (`Entity` for `Entity_getTransform`)
    pub fn class(&self) -> &'static str {
        self.symbol.split_once('_').map_or(self.symbol, |(class, _)| class)
    }
}

use ValType::{F64, I32};

const fn decl(symbol: &'static str, params: &'static [ValType], result: Option<ValType>) -> BindingDecl {
    BindingDecl { symbol, params, result }
}

/// Every binding declared in [`crate::ffi`]
pub static BINDINGS: &[BindingDecl] = &[
    decl("Entity_spawnChild", &[I32], Some(I32)),
    decl("Entity_spawnChildAt", &[I32, F64, F64, F64], Some(I32)),
    decl("Entity_spawnScriptedChild", &[I32, I32, I32], Some(I32)),
    decl("Entity_spawnScriptedChildAt", &[I32, I32, I32, F64, F64, F64], Some(I32)),
    decl("Entity_hasTransform", &[I32], Some(I32)),
    decl("Entity_addTransform", &[I32], Some(I32)),
    decl("Entity_getTransform", &[I32], Some(I32)),
    decl("Entity_hasPointLight", &[I32], Some(I32)),
    decl("Entity_addPointLight", &[I32], Some(I32)),
    decl("Entity_getPointLight", &[I32], Some(I32)),
    decl("TransformComponent_getX", &[I32], Some(F64)),
    decl("TransformComponent_getY", &[I32], Some(F64)),
    decl("TransformComponent_getZ", &[I32], Some(F64)),
    decl("TransformComponent_setPosition", &[I32, F64, F64, F64], None),
    decl("TransformComponent_getRotationW", &[I32], Some(F64)),
    decl("TransformComponent_getRotationX", &[I32], Some(F64)),
    decl("TransformComponent_getRotationY", &[I32], Some(F64)),
    decl("TransformComponent_getRotationZ", &[I32], Some(F64)),
    decl("TransformComponent_setRotation", &[I32, F64, F64, F64, F64], None),
    decl("PointLightComponent_setIntensity", &[I32, F64, F64, F64], None),
    decl("UiPanel_getWidth", &[I32], Some(F64)),
    decl("UiPanel_getHeight", &[I32], Some(F64)),
    decl("UiPanel_setSize", &[I32, F64, F64], None),
    decl("UiPanel_setColor", &[I32, F64, F64, F64, F64], None),
    decl("UiPanel_createGlyphStyle", &[I32], Some(I32)),
    decl(
        "UiPanel_drawTriangle",
        &[I32, F64, F64, F64, F64, F64, F64, F64, F64, F64, F64],
        None,
    ),
    decl("UiPanel_drawCircle", &[I32, F64, F64, F64, F64, F64, F64, F64], None),
    decl("UiPanel_drawRing", &[I32, F64, F64, F64, F64, F64, F64, F64, F64], None),
    decl("GlyphStyle_setText", &[I32, I32, I32], None),
    decl("GlyphStyle_setColor", &[I32, F64, F64, F64, F64], None),
    decl("GlyphStyle_setOffset", &[I32, F64, F64], None),
    decl("GlyphStyle_setScale", &[I32, F64], None),
    decl("log", &[I32, I32, I32], None),
];

/// Every import the guest declares
pub fn binding_manifest() -> &'static [BindingDecl] {
    BINDINGS
}

/// Look a binding up by import name
pub fn find_binding(symbol: &str) -> Option<&'static BindingDecl> {
    BINDINGS.iter().find(|decl| decl.symbol == symbol)
}

/// The manifest as pretty-printed JSON
pub fn manifest_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(binding_manifest())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_are_unique() {
        let symbols: HashSet<_> = BINDINGS.iter().map(|d| d.symbol).collect();
        assert_eq!(symbols.len(), BINDINGS.len());
    }

    #[test]
    fn test_receiver_first() {
        for decl in BINDINGS.iter().filter(|d| d.symbol != "log") {
            assert_eq!(decl.params.first(), Some(&ValType::I32), "{}", decl.symbol);
        }
    }

    #[test]
    fn test_known_classes() {
        let classes = ["Entity", "TransformComponent", "PointLightComponent", "UiPanel", "GlyphStyle", "log"];
        for decl in BINDINGS {
            assert!(classes.contains(&decl.class()), "{}", decl.symbol);
        }
    }

    #[test]
    fn test_lookup_and_json() {
        let circle = find_binding("UiPanel_drawCircle").expect("declared");
        assert_eq!(circle.params.len(), 8);
        assert_eq!(circle.result, None);

        let json = manifest_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), BINDINGS.len());
        assert_eq!(entries[0]["symbol"], "Entity_spawnChild");
        assert_eq!(entries[0]["result"], "i32");
    }
}
