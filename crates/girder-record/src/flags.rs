//! JVM access flag masks and predicates.
//!
//! Records carry the raw `access_flags` word of the declaration. The masks
//! below follow JVMS table 4.1-B / 4.5-A / 4.6-A; flags that only make sense
//! on one kind of declaration (e.g. `ACC_VOLATILE`) are simply meaningless on
//! the others.

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_SYNCHRONIZED: u16 = 0x0020;
pub const ACC_VOLATILE: u16 = 0x0040;
pub const ACC_TRANSIENT: u16 = 0x0080;
pub const ACC_NATIVE: u16 = 0x0100;
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;
pub const ACC_STRICT: u16 = 0x0800;
pub const ACC_SYNTHETIC: u16 = 0x1000;
pub const ACC_ANNOTATION: u16 = 0x2000;
pub const ACC_ENUM: u16 = 0x4000;

pub fn is_public(flags: u16) -> bool {
    flags & ACC_PUBLIC != 0
}

pub fn is_private(flags: u16) -> bool {
    flags & ACC_PRIVATE != 0
}

pub fn is_protected(flags: u16) -> bool {
    flags & ACC_PROTECTED != 0
}

/// True when none of `public`/`private`/`protected` is set (package-private).
pub fn is_package_private(flags: u16) -> bool {
    flags & (ACC_PUBLIC | ACC_PRIVATE | ACC_PROTECTED) == 0
}

pub fn is_static(flags: u16) -> bool {
    flags & ACC_STATIC != 0
}

pub fn is_final(flags: u16) -> bool {
    flags & ACC_FINAL != 0
}

pub fn is_abstract(flags: u16) -> bool {
    flags & ACC_ABSTRACT != 0
}

pub fn is_synthetic(flags: u16) -> bool {
    flags & ACC_SYNTHETIC != 0
}

pub fn is_enum(flags: u16) -> bool {
    flags & ACC_ENUM != 0
}
