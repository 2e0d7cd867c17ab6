use crate::cursor::Cursor;
use crate::error::Result;
use crate::tokens::{ClassToken, MethodDescriptorToken, PrimitiveToken, TypeToken};

/// Parse a JVM field descriptor such as `I`, `[[D` or `Ljava/util/List;`.
pub fn parse_field_descriptor(input: &str) -> Result<TypeToken> {
    let mut cur = Cursor::new(input);
    let ty = descriptor_type(&mut cur)?;
    cur.finish()?;
    Ok(ty)
}

/// Parse a JVM method descriptor such as `(ILjava/lang/String;)[I`.
pub fn parse_method_descriptor(input: &str) -> Result<MethodDescriptorToken> {
    let mut cur = Cursor::new(input);
    cur.expect(b'(')?;
    let mut params = Vec::new();
    while !cur.eat(b')') {
        if cur.is_at_end() {
            return Err(cur.malformed());
        }
        params.push(descriptor_type(&mut cur)?);
    }
    let return_type = if cur.eat(b'V') {
        None
    } else {
        Some(descriptor_type(&mut cur)?)
    };
    cur.finish()?;
    Ok(MethodDescriptorToken {
        params,
        return_type,
    })
}

fn descriptor_type(cur: &mut Cursor<'_>) -> Result<TypeToken> {
    match cur.peek() {
        Some(b'[') => {
            cur.bump();
            Ok(TypeToken::Array(Box::new(descriptor_type(cur)?)))
        }
        Some(b'L') => {
            cur.bump();
            // Descriptors carry no type arguments; the name runs to `;`.
            let name = cur.take_until(|b| matches!(b, b';' | b'<' | b'(' | b')'));
            if name.is_empty() {
                return Err(cur.malformed());
            }
            cur.expect(b';')?;
            Ok(TypeToken::Class(ClassToken::raw(name)))
        }
        Some(tag) => {
            let prim = PrimitiveToken::from_tag(tag).ok_or_else(|| cur.malformed())?;
            cur.bump();
            Ok(TypeToken::Primitive(prim))
        }
        None => Err(cur.malformed()),
    }
}
