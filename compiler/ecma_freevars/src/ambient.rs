//! Ambient names: identifiers the host provides without any declaration in
//! the program.
//!
//! A namespace is a set of names plus an optional parent namespace, like a
//! host global object and its prototype chain. Every name reachable through
//! the chain is treated as declared in the root scope.

use ecma_ir::{Name, StringInterner};

/// Value and function properties of the standard global object.
const GLOBAL_VALUES: &[&str] = &[
    "globalThis",
    "undefined",
    "NaN",
    "Infinity",
    "eval",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
];

/// Constructors and namespace objects of the standard global object.
const GLOBAL_CONSTRUCTORS: &[&str] = &[
    "Object",
    "Function",
    "Array",
    "String",
    "Number",
    "Boolean",
    "Symbol",
    "Date",
    "RegExp",
    "Error",
    "EvalError",
    "RangeError",
    "ReferenceError",
    "SyntaxError",
    "TypeError",
    "URIError",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "Promise",
    "Proxy",
    "ArrayBuffer",
    "DataView",
    "Int8Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "Float32Array",
    "Float64Array",
    "Math",
    "JSON",
    "Reflect",
    "Intl",
];

/// Properties every object inherits from `Object.prototype`.
const OBJECT_PROTOTYPE: &[&str] = &[
    "constructor",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toLocaleString",
    "toString",
    "valueOf",
];

/// A host namespace and its ancestor chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmbientNamespace {
    names: Vec<Name>,
    parent: Option<Box<AmbientNamespace>>,
}

impl AmbientNamespace {
    pub fn new(names: impl IntoIterator<Item = Name>) -> Self {
        AmbientNamespace {
            names: names.into_iter().collect(),
            parent: None,
        }
    }

    /// Namespace with no names and no parent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Intern `names` and build a namespace from them.
    pub fn from_strs(interner: &StringInterner, names: &[&str]) -> Self {
        Self::new(names.iter().map(|name| interner.intern(name)))
    }

    /// Set the namespace this one inherits from.
    #[must_use]
    pub fn with_parent(mut self, parent: AmbientNamespace) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// A standard host: the global object, inheriting from
    /// `Object.prototype`.
    pub fn ecmascript(interner: &StringInterner) -> Self {
        let globals = GLOBAL_VALUES
            .iter()
            .chain(GLOBAL_CONSTRUCTORS)
            .map(|name| interner.intern(name));
        Self::new(globals).with_parent(Self::from_strs(interner, OBJECT_PROTOTYPE))
    }

    /// Names defined directly on this namespace.
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn parent(&self) -> Option<&AmbientNamespace> {
        self.parent.as_deref()
    }

    /// Own names, then each ancestor's, nearest first. A name shadowed by
    /// a nearer namespace is yielded again.
    pub fn names_in_chain(&self) -> impl Iterator<Item = Name> + '_ {
        std::iter::successors(Some(self), |ns| ns.parent())
            .flat_map(|ns| ns.names.iter().copied())
    }

    /// Whether `name` is defined anywhere in the chain.
    pub fn contains(&self, name: Name) -> bool {
        self.names_in_chain().any(|n| n == name)
    }
}
