//! Invocation wire format shared by the contracts
//!
//! An invocation is the exported method name followed by its arguments:
//!
//! ```text
//! [name len: u8][name: utf-8][arg count: u8][arg 0]..[arg n]
//! ```
//!
//! Each argument is a stack item prefixed with its type code. Booleans take
//! one byte, integers eight little-endian bytes, byte strings and arrays a
//! little-endian `u32` length followed by their contents. Method names are
//! limited to 255 bytes, argument lists to 255 items and byte strings and
//! arrays to `u32::MAX` entries; packing anything larger fails with
//! `InvalidArgument`.

use {crate::interop::StackItem, solana_program_error::ProgramError};

const TYPE_ANY: u8 = 0x00;
const TYPE_BOOLEAN: u8 = 0x20;
const TYPE_INTEGER: u8 = 0x21;
const TYPE_BYTE_STRING: u8 = 0x28;
const TYPE_ARRAY: u8 = 0x40;

/// Nesting limit for arrays
const MAX_DEPTH: usize = 16;

/// Packs a method call into its wire form.
pub fn pack_invocation(method: &str, args: &[StackItem]) -> Result<Vec<u8>, ProgramError> {
    let name_len = u8::try_from(method.len()).map_err(|_| ProgramError::InvalidArgument)?;
    let count = u8::try_from(args.len()).map_err(|_| ProgramError::InvalidArgument)?;
    let mut buf = Vec::new();
    buf.push(name_len);
    buf.extend_from_slice(method.as_bytes());
    buf.push(count);
    for arg in args {
        pack_stack_item(arg, &mut buf)?;
    }
    Ok(buf)
}

/// Splits a wire invocation into the method name and its arguments. Trailing
/// bytes are rejected.
pub fn unpack_invocation(input: &[u8]) -> Result<(&str, Vec<StackItem>), ProgramError> {
    let (&name_len, rest) = input
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    let (name, rest) = split_at_checked(rest, name_len as usize)?;
    let method = std::str::from_utf8(name).map_err(|_| ProgramError::InvalidInstructionData)?;

    let (&count, mut rest) = rest
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    let mut args = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (item, tail) = unpack_stack_item(rest, 0)?;
        args.push(item);
        rest = tail;
    }
    if !rest.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }
    Ok((method, args))
}

/// Appends the tagged encoding of `item` to `buf`.
pub fn pack_stack_item(item: &StackItem, buf: &mut Vec<u8>) -> Result<(), ProgramError> {
    buf.push(item.type_code());
    match item {
        StackItem::Any => {}
        StackItem::Boolean(value) => buf.push(u8::from(*value)),
        StackItem::Integer(value) => buf.extend_from_slice(&value.to_le_bytes()),
        StackItem::ByteString(bytes) => {
            buf.extend_from_slice(&pack_len(bytes.len())?);
            buf.extend_from_slice(bytes);
        }
        StackItem::Array(items) => {
            buf.extend_from_slice(&pack_len(items.len())?);
            for item in items {
                pack_stack_item(item, buf)?;
            }
        }
    }
    Ok(())
}

fn pack_len(len: usize) -> Result<[u8; 4], ProgramError> {
    u32::try_from(len)
        .map(u32::to_le_bytes)
        .map_err(|_| ProgramError::InvalidArgument)
}

fn unpack_stack_item(input: &[u8], depth: usize) -> Result<(StackItem, &[u8]), ProgramError> {
    if depth > MAX_DEPTH {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (&tag, rest) = input
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    match tag {
        TYPE_ANY => Ok((StackItem::Any, rest)),
        TYPE_BOOLEAN => match rest.split_first() {
            Some((&0, rest)) => Ok((StackItem::Boolean(false), rest)),
            Some((&1, rest)) => Ok((StackItem::Boolean(true), rest)),
            _ => Err(ProgramError::InvalidInstructionData),
        },
        TYPE_INTEGER => {
            let (value, rest) = split_at_checked(rest, 8)?;
            let value = i64::from_le_bytes(value.try_into().unwrap());
            Ok((StackItem::Integer(value), rest))
        }
        TYPE_BYTE_STRING => {
            let (len, rest) = unpack_u32(rest)?;
            let (bytes, rest) = split_at_checked(rest, len as usize)?;
            Ok((StackItem::ByteString(bytes.to_vec()), rest))
        }
        TYPE_ARRAY => {
            let (count, mut rest) = unpack_u32(rest)?;
            // every element takes at least its tag byte
            if count as usize > rest.len() {
                return Err(ProgramError::InvalidInstructionData);
            }
            let mut items = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let (item, tail) = unpack_stack_item(rest, depth + 1)?;
                items.push(item);
                rest = tail;
            }
            Ok((StackItem::Array(items), rest))
        }
        _ => Err(ProgramError::InvalidInstructionData),
    }
}

fn unpack_u32(input: &[u8]) -> Result<(u32, &[u8]), ProgramError> {
    let (value, rest) = split_at_checked(input, 4)?;
    Ok((u32::from_le_bytes(value.try_into().unwrap()), rest))
}

fn split_at_checked(input: &[u8], mid: usize) -> Result<(&[u8], &[u8]), ProgramError> {
    if input.len() < mid {
        return Err(ProgramError::InvalidInstructionData);
    }
    Ok(input.split_at(mid))
}
