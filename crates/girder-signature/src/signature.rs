use crate::cursor::Cursor;
use crate::error::Result;
use crate::tokens::{
    ArgToken, ClassSignatureToken, ClassToken, MethodSignatureToken, PrimitiveToken,
    TypeParamToken, TypeToken,
};

/// Parse the `Signature` attribute of a class declaration, e.g.
/// `<T:Ljava/lang/Object;>Ljava/lang/Object;Ljava/lang/Comparable<TT;>;`.
pub fn parse_class_signature(input: &str) -> Result<ClassSignatureToken> {
    let mut cur = Cursor::new(input);
    let type_params = type_params(&mut cur)?;
    let superclass = class_type(&mut cur)?;
    let mut interfaces = Vec::new();
    while !cur.is_at_end() {
        interfaces.push(class_type(&mut cur)?);
    }
    Ok(ClassSignatureToken {
        type_params,
        superclass,
        interfaces,
    })
}

/// Parse the `Signature` attribute of a method declaration, e.g.
/// `<T:Ljava/lang/Number;>(TT;)TT;^Ljava/io/IOException;`.
pub fn parse_method_signature(input: &str) -> Result<MethodSignatureToken> {
    let mut cur = Cursor::new(input);
    let type_params = type_params(&mut cur)?;
    cur.expect(b'(')?;
    let mut params = Vec::new();
    while !cur.eat(b')') {
        if cur.is_at_end() {
            return Err(cur.malformed());
        }
        params.push(type_signature(&mut cur)?);
    }
    let return_type = if cur.eat(b'V') {
        None
    } else {
        Some(type_signature(&mut cur)?)
    };
    let mut throws = Vec::new();
    while cur.eat(b'^') {
        // Throws clauses allow only class types and type variables.
        match cur.peek() {
            Some(b'L') | Some(b'T') => throws.push(reference_type(&mut cur)?),
            _ => return Err(cur.malformed()),
        }
    }
    cur.finish()?;
    Ok(MethodSignatureToken {
        type_params,
        params,
        return_type,
        throws,
    })
}

/// Parse the `Signature` attribute of a field, parameter, or record component:
/// a single reference type, e.g. `Ljava/util/List<+Ljava/lang/Number;>;`.
pub fn parse_field_signature(input: &str) -> Result<TypeToken> {
    let mut cur = Cursor::new(input);
    let ty = reference_type(&mut cur)?;
    cur.finish()?;
    Ok(ty)
}

fn type_params(cur: &mut Cursor<'_>) -> Result<Vec<TypeParamToken>> {
    if !cur.eat(b'<') {
        return Ok(Vec::new());
    }
    let mut params = Vec::new();
    while !cur.eat(b'>') {
        let name = cur.take_until(|b| matches!(b, b':' | b'>' | b'<'));
        if name.is_empty() {
            return Err(cur.malformed());
        }
        cur.expect(b':')?;
        // An empty class bound (`T::Liface;`) is legal and distinct from an
        // explicit `java/lang/Object` bound.
        let class_bound = match cur.peek() {
            Some(b'L') | Some(b'T') | Some(b'[') => Some(reference_type(cur)?),
            _ => None,
        };
        let mut interface_bounds = Vec::new();
        while cur.eat(b':') {
            interface_bounds.push(reference_type(cur)?);
        }
        params.push(TypeParamToken {
            name: name.to_string(),
            class_bound,
            interface_bounds,
        });
    }
    if params.is_empty() {
        return Err(cur.malformed());
    }
    Ok(params)
}

fn type_signature(cur: &mut Cursor<'_>) -> Result<TypeToken> {
    if let Some(prim) = cur.peek().and_then(PrimitiveToken::from_tag) {
        cur.bump();
        return Ok(TypeToken::Primitive(prim));
    }
    reference_type(cur)
}

fn reference_type(cur: &mut Cursor<'_>) -> Result<TypeToken> {
    match cur.peek() {
        Some(b'L') => Ok(TypeToken::Class(class_type(cur)?)),
        Some(b'T') => {
            cur.bump();
            let name = cur.take_until(|b| matches!(b, b';' | b'<' | b'>' | b':'));
            if name.is_empty() {
                return Err(cur.malformed());
            }
            cur.expect(b';')?;
            Ok(TypeToken::Variable(name.to_string()))
        }
        Some(b'[') => {
            cur.bump();
            Ok(TypeToken::Array(Box::new(type_signature(cur)?)))
        }
        _ => Err(cur.malformed()),
    }
}

fn class_type(cur: &mut Cursor<'_>) -> Result<ClassToken> {
    cur.expect(b'L')?;
    let mut internal_name = String::new();
    let mut args = Vec::new();
    loop {
        let segment = cur.take_until(|b| matches!(b, b'<' | b';' | b'.'));
        if segment.is_empty() {
            return Err(cur.malformed());
        }
        internal_name.push_str(segment);
        if cur.eat(b'<') {
            if cur.peek() == Some(b'>') {
                return Err(cur.malformed());
            }
            while !cur.eat(b'>') {
                if cur.is_at_end() {
                    return Err(cur.malformed());
                }
                args.push(type_argument(cur)?);
            }
        }
        match cur.bump() {
            Some(b';') => break,
            // Nested class segment: flatten to the binary `$` form.
            Some(b'.') => internal_name.push('$'),
            _ => return Err(cur.malformed()),
        }
    }
    Ok(ClassToken {
        internal_name,
        args,
    })
}

fn type_argument(cur: &mut Cursor<'_>) -> Result<ArgToken> {
    if cur.eat(b'*') {
        Ok(ArgToken::Any)
    } else if cur.eat(b'+') {
        Ok(ArgToken::Extends(reference_type(cur)?))
    } else if cur.eat(b'-') {
        Ok(ArgToken::Super(reference_type(cur)?))
    } else {
        Ok(ArgToken::Exact(reference_type(cur)?))
    }
}
