//! Canonical byte layout shared by both signature types: a big-endian `u64` ring size followed by
//! fixed-width fields in declaration order.

use crate::{types::*, Error};
use ringsig_crypto::element::CurveElement;
use std::convert::TryFrom;

/// Length of the ring size prefix.
pub(crate) const RING_SIZE_LEN: usize = 8;

pub(crate) fn write_ring_size(buf: &mut Vec<u8>, ring_size: usize) {
    buf.extend_from_slice(&(ring_size as u64).to_be_bytes());
}

pub(crate) fn write_points<G: CurveElement>(buf: &mut Vec<u8>, points: &[G]) {
    for point in points {
        buf.extend_from_slice(element::to_bytes(point).as_ref());
    }
}

/// Reads fixed-width fields off the front of a byte slice.
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn truncated(&self, expected: usize) -> Error {
        Error::MalformedSignature {
            expected,
            got: self.bytes.len(),
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let end = self.offset.saturating_add(len);
        if end > self.bytes.len() {
            return Err(self.truncated(end));
        }
        let taken = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(taken)
    }

    /// Read the ring size prefix and check that the whole input has the length
    /// `encoded_len(ring_size)`, before anything proportional to the ring size is allocated.
    pub(crate) fn ring_size(
        &mut self,
        encoded_len: impl Fn(usize) -> Option<usize>,
    ) -> Result<usize, Error> {
        let mut prefix = [0; RING_SIZE_LEN];
        prefix.copy_from_slice(self.take(RING_SIZE_LEN)?);
        let ring_size = usize::try_from(u64::from_be_bytes(prefix))
            .map_err(|_| self.truncated(usize::MAX))?;

        match encoded_len(ring_size) {
            Some(expected) if expected == self.bytes.len() => Ok(ring_size),
            Some(expected) => Err(self.truncated(expected)),
            None => Err(self.truncated(usize::MAX)),
        }
    }

    pub(crate) fn point<G: CurveElement>(&mut self) -> Result<G, Error> {
        element::from_bytes(self.take(G::ENCODED_LEN)?)
    }

    pub(crate) fn points<G: CurveElement>(&mut self, count: usize) -> Result<Vec<G>, Error> {
        (0..count).map(|_| self.point()).collect()
    }

    pub(crate) fn scalar(&mut self) -> Result<Scalar, Error> {
        scalar::from_bytes(self.take(scalar::SCALAR_LEN)?)
    }

    /// Fail if any input is left over.
    pub(crate) fn finish(self) -> Result<(), Error> {
        if self.offset == self.bytes.len() {
            Ok(())
        } else {
            Err(self.truncated(self.offset))
        }
    }
}

/// Length of a signature with `ring_size` commitments of `element_len` bytes and `fixed_len`
/// bytes of other fields, or `None` on overflow.
pub(crate) fn encoded_len(ring_size: usize, element_len: usize, fixed_len: usize) -> Option<usize> {
    ring_size
        .checked_mul(element_len)?
        .checked_add(RING_SIZE_LEN + fixed_len)
}
