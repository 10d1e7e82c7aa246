//! Human-readable rendering of instance trees and type definitions.

use binio_core::Colors;

use crate::error::Result;
use crate::format::DataFormat;
use crate::instance::{CollectionData, CompoundInstance, MemberInstance, SequenceInstance};
use crate::types::Type;

/// Elements shown per sequence before the rest is elided.
pub const DEFAULT_LIMIT: usize = 16;

/// Render `root` and everything below it, resolving every member on the way.
pub fn dump(root: &CompoundInstance<'_>, colors: Colors) -> Result<String> {
    Dumper::new(colors).dump(root)
}

/// Instance tree renderer.
///
/// Output has one line per member. Scalars print as `name: value`; containers
/// print their type and position, then their members indented by two spaces.
#[derive(Clone, Copy, Debug)]
pub struct Dumper {
    colors: Colors,
    limit: usize,
}

impl Dumper {
    pub fn new(colors: Colors) -> Self {
        Self {
            colors,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Maximum number of elements printed per sequence.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn dump(&self, root: &CompoundInstance<'_>) -> Result<String> {
        let c = &self.colors;
        let mut out = String::new();
        push_line(
            &mut out,
            0,
            &format!(
                "{}{}{} {}@{:#x}{}",
                c.name,
                root.compound_type().name(),
                c.reset,
                c.meta,
                root.position(),
                c.reset
            ),
        );
        self.compound(&mut out, root, 1)?;
        Ok(out)
    }

    fn compound(
        &self,
        out: &mut String,
        compound: &CompoundInstance<'_>,
        depth: usize,
    ) -> Result<()> {
        for (index, member) in compound.compound_type().members().iter().enumerate() {
            let instance = compound.member_instance(index)?;
            self.member(out, member.name(), instance, depth)?;
        }
        Ok(())
    }

    fn sequence(
        &self,
        out: &mut String,
        sequence: &SequenceInstance<'_>,
        depth: usize,
    ) -> Result<()> {
        let count = sequence.element_count();
        let shown = count.min(self.limit);
        for index in 0..shown {
            let element = sequence.member_instance(index)?;
            self.member(out, &format!("[{index}]"), element, depth)?;
        }
        if count > shown {
            let c = &self.colors;
            push_line(
                out,
                depth,
                &format!("{}... ({} more){}", c.meta, count - shown, c.reset),
            );
        }
        Ok(())
    }

    fn member(
        &self,
        out: &mut String,
        label: &str,
        instance: &MemberInstance<'_>,
        depth: usize,
    ) -> Result<()> {
        let c = &self.colors;
        match instance {
            MemberInstance::Scalar(scalar) => {
                push_line(
                    out,
                    depth,
                    &format!(
                        "{}{label}{}: {}{}{}",
                        c.name,
                        c.reset,
                        c.value,
                        scalar.value()?,
                        c.reset
                    ),
                );
            }
            MemberInstance::Compound(compound) => {
                push_line(
                    out,
                    depth,
                    &format!(
                        "{}{label}{}: {}{} @{:#x}{}",
                        c.name,
                        c.reset,
                        c.meta,
                        compound.compound_type().name(),
                        compound.position(),
                        c.reset
                    ),
                );
                self.compound(out, compound, depth + 1)?;
            }
            MemberInstance::Sequence(sequence) => {
                push_line(
                    out,
                    depth,
                    &format!(
                        "{}{label}{}: {}{} @{:#x} ({} elements){}",
                        c.name,
                        c.reset,
                        c.meta,
                        sequence.sequence_type().name(),
                        sequence.position(),
                        sequence.element_count(),
                        c.reset
                    ),
                );
                self.sequence(out, sequence, depth + 1)?;
            }
        }
        Ok(())
    }
}

/// List a format's root, byte order and named definitions with static sizes.
pub fn dump_types(format: &DataFormat, colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();
    push_line(
        &mut out,
        0,
        &format!(
            "{}format{} {} {}({} endian, root {}){}",
            c.meta,
            c.reset,
            format.name(),
            c.meta,
            format.byte_order(),
            format.root_type().name(),
            c.reset
        ),
    );
    for (name, ty) in format.type_defs() {
        let size = match ty.static_size() {
            Some(size) => format!("{size} bytes"),
            None => "dynamic".to_string(),
        };
        push_line(
            &mut out,
            0,
            &format!(
                "{}{name}{} = {}  {}; {size}{}",
                c.name,
                c.reset,
                describe(ty),
                c.meta,
                c.reset
            ),
        );
    }
    out
}

fn describe(ty: &Type) -> String {
    match ty {
        Type::Compound(compound) => {
            let members: Vec<String> = compound
                .members()
                .iter()
                .map(|m| format!("{}: {}", m.name(), m.ty().name()))
                .collect();
            format!("{{ {} }}", members.join(", "))
        }
        Type::Simple(_) | Type::Sequence(_) => ty.name(),
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(line);
    out.push('\n');
}
