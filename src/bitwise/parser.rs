// Parser combinators using nom for advertising data structures

use nom::{bytes::complete::take, number::complete::be_u8, IResult};

/// Parse the length byte that opens an advertising structure
pub fn parse_ad_length(input: &[u8]) -> IResult<&[u8], u8> {
    be_u8(input)
}

/// Parse the type code and value that follow a non-zero length byte
///
/// The length counts the type byte, so the value is `length - 1` bytes long.
pub fn parse_ad_body(length: u8) -> impl Fn(&[u8]) -> IResult<&[u8], (u8, &[u8])> {
    move |input: &[u8]| {
        let (input, ad_type) = be_u8(input)?;
        let value_len = usize::from(length.saturating_sub(1));
        let (input, value) = take(value_len)(input)?;
        Ok((input, (ad_type, value)))
    }
}

/// Parse a fixed-length byte array
pub fn parse_fixed<const N: usize>(input: &[u8]) -> IResult<&[u8], [u8; N]> {
    let (input, bytes) = take(N)(input)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok((input, out))
}
