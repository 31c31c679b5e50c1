//! Statically declared configurable classes.
//!
//! Classes are grouped into modules and looked up by module and class name.
//! A class may extend a base class from any module in the same catalog; its
//! members are the base members followed by its own, with redeclared names
//! replacing the inherited member in place.

mod builtin;

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde_json::Value;

use crate::descriptor::TraitDescriptor;
use crate::trait_type::TraitType;
use crate::{Error, Result};

/// Metadata key marking a trait as configurable
pub const CONFIG_TAG: &str = "config";

/// Arbitrary metadata attached to a trait, keyed by tag name
pub type Metadata = BTreeMap<String, Value>;

/// A trait declaration on a class
#[derive(Debug, Clone, PartialEq)]
pub struct TraitDef {
    pub name: String,
    pub trait_type: TraitType,
    pub allow_none: bool,
    pub help: String,
    pub metadata: Metadata,
}

impl TraitDef {
    pub fn new(name: impl Into<String>, trait_type: TraitType) -> Self {
        Self {
            name: name.into(),
            trait_type,
            allow_none: false,
            help: String::new(),
            metadata: Metadata::new(),
        }
    }

    #[must_use]
    pub const fn allow_none(mut self) -> Self {
        self.allow_none = true;
        self
    }

    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Attach a metadata tag
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Tag the trait as configurable
    #[must_use]
    pub fn config(self) -> Self {
        self.tag(CONFIG_TAG, true)
    }

    pub fn is_configurable(&self) -> bool {
        is_config_tagged(&self.metadata)
    }

    pub fn descriptor(&self) -> TraitDescriptor {
        TraitDescriptor {
            name: self.name.clone(),
            type_id: self.trait_type.clone(),
            allow_none: self.allow_none,
            help: self.help.clone(),
            is_configurable: self.is_configurable(),
        }
    }
}

/// Whether a metadata mapping carries `config: true`.
pub fn is_config_tagged(metadata: &Metadata) -> bool {
    matches!(metadata.get(CONFIG_TAG), Some(Value::Bool(true)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Constant,
}

/// A class member: either a trait or a plain attribute without metadata
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Trait(TraitDef),
    Plain { name: String, kind: MemberKind },
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Self::Trait(def) => &def.name,
            Self::Plain { name, .. } => name,
        }
    }

    pub const fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::Trait(def) => Some(&def.metadata),
            Self::Plain { .. } => None,
        }
    }

    pub const fn as_trait(&self) -> Option<&TraitDef> {
        match self {
            Self::Trait(def) => Some(def),
            Self::Plain { .. } => None,
        }
    }
}

/// Module-qualified class name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    pub module: String,
    pub class: String,
}

impl ClassRef {
    pub fn new(module: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    name: String,
    base: Option<ClassRef>,
    members: Vec<Member>,
}

impl ClassDef {
    pub fn builder(name: impl Into<String>) -> ClassDefBuilder {
        ClassDefBuilder {
            name: name.into(),
            base: None,
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn base(&self) -> Option<&ClassRef> {
        self.base.as_ref()
    }

    /// Members declared directly on this class, in declaration order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn traits(&self) -> impl Iterator<Item = &TraitDef> {
        self.members.iter().filter_map(Member::as_trait)
    }
}

/// Declarative builder for [`ClassDef`]
#[derive(Debug, Clone)]
pub struct ClassDefBuilder {
    name: String,
    base: Option<ClassRef>,
    members: Vec<Member>,
}

impl ClassDefBuilder {
    #[must_use]
    pub fn extends(mut self, module: impl Into<String>, class: impl Into<String>) -> Self {
        self.base = Some(ClassRef::new(module, class));
        self
    }

    #[must_use]
    pub fn with_trait(mut self, def: TraitDef) -> Self {
        self.members.push(Member::Trait(def));
        self
    }

    #[must_use]
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.members.push(Member::Plain {
            name: name.into(),
            kind: MemberKind::Method,
        });
        self
    }

    #[must_use]
    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.members.push(Member::Plain {
            name: name.into(),
            kind: MemberKind::Constant,
        });
        self
    }

    pub fn build(self) -> ClassDef {
        ClassDef {
            name: self.name,
            base: self.base,
            members: self.members,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDef {
    name: String,
    classes: BTreeMap<String, ClassDef>,
}

impl ModuleDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: ClassDef) -> Self {
        self.classes.insert(class.name.clone(), class);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}

/// All modules available for lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassCatalog {
    modules: BTreeMap<String, ModuleDef>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    #[must_use]
    pub fn with_module(mut self, module: ModuleDef) -> Self {
        self.register(module);
        self
    }

    pub fn register(&mut self, module: ModuleDef) -> Option<ModuleDef> {
        self.modules.insert(module.name.clone(), module)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Look up a class by module and class name.
    pub fn load(&self, module: &str, class: &str) -> Result<&ClassDef> {
        let module_def = self
            .modules
            .get(module)
            .ok_or_else(|| Error::ModuleNotFound {
                module: module.to_string(),
                known: self.module_names().join(", "),
            })?;

        module_def
            .class(class)
            .ok_or_else(|| Error::ClassNotFound {
                module: module.to_string(),
                class: class.to_string(),
            })
    }

    /// Load a class and linearize its members across the inheritance chain.
    pub fn resolve(&self, module: &str, class: &str) -> Result<ResolvedClass<'_>> {
        let root = ClassRef::new(module, class);
        let mut seen: Vec<ClassRef> = Vec::new();
        let mut chain: Vec<&ClassDef> = Vec::new();
        let mut current = root.clone();

        loop {
            if seen.contains(&current) {
                let path = seen.iter().chain(std::iter::once(&current)).join(" -> ");
                return Err(Error::InheritanceCycle(path));
            }
            let def = self.load(&current.module, &current.class)?;
            chain.push(def);
            seen.push(current);
            match def.base() {
                Some(base) => current = base.clone(),
                None => break,
            }
        }

        let mut members: Vec<&Member> = Vec::new();
        for def in chain.into_iter().rev() {
            for member in def.members() {
                match members.iter().position(|m| m.name() == member.name()) {
                    Some(index) => members[index] = member,
                    None => members.push(member),
                }
            }
        }

        Ok(ResolvedClass {
            class_ref: root,
            members,
        })
    }
}

/// A class with its inherited members merged in
#[derive(Debug, Clone)]
pub struct ResolvedClass<'c> {
    class_ref: ClassRef,
    members: Vec<&'c Member>,
}

impl<'c> ResolvedClass<'c> {
    pub const fn class_ref(&self) -> &ClassRef {
        &self.class_ref
    }

    /// Members in inheritance order: base members first.
    pub fn members(&self) -> &[&'c Member] {
        &self.members
    }

    /// Trait declarations in inheritance order.
    pub fn class_traits(&self) -> impl Iterator<Item = &'c TraitDef> + '_ {
        self.members.iter().copied().filter_map(Member::as_trait)
    }

    /// All members sorted by name.
    pub fn members_by_name(&self) -> Vec<&'c Member> {
        self.members
            .iter()
            .copied()
            .sorted_by(|a, b| a.name().cmp(b.name()))
            .collect()
    }
}
