//! Detection of DNS name compression (RFC 1035 §4.1.4) in a raw message.

const HEADER_LEN: usize = 12;
const POINTER_MASK: u8 = 0xC0;

enum NameEnd {
    Labels(usize),
    Pointer,
    Malformed,
}

/// Reports whether any question or record owner name in `message` is encoded
/// with a compression pointer. RDATA is skipped without inspection.
pub fn uses_name_compression(message: &[u8]) -> bool {
    if message.len() < HEADER_LEN {
        return false;
    }

    let count = |at: usize| usize::from(u16::from_be_bytes([message[at], message[at + 1]]));
    let questions = count(4);
    let records = count(6) + count(8) + count(10);
    let mut pos = HEADER_LEN;

    for _ in 0..questions {
        match skip_name(message, pos) {
            NameEnd::Pointer => return true,
            NameEnd::Labels(next) => pos = next + 4,
            NameEnd::Malformed => return false,
        }
    }

    for _ in 0..records {
        match skip_name(message, pos) {
            NameEnd::Pointer => return true,
            NameEnd::Labels(next) => {
                // type(2) class(2) ttl(4) precede rdlength
                let rdlength_at = next + 8;
                if rdlength_at + 2 > message.len() {
                    return false;
                }
                pos = rdlength_at + 2 + count(rdlength_at);
            }
            NameEnd::Malformed => return false,
        }
    }

    false
}

fn skip_name(message: &[u8], mut pos: usize) -> NameEnd {
    loop {
        let Some(&len) = message.get(pos) else {
            return NameEnd::Malformed;
        };

        match len & POINTER_MASK {
            POINTER_MASK => return NameEnd::Pointer,
            0 if len == 0 => return NameEnd::Labels(pos + 1),
            0 => pos += 1 + usize::from(len),
            _ => return NameEnd::Malformed,
        }
    }
}
