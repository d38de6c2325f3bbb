//! Graph input and Matrix Market output.
//!
//! The binary graph format is a little-endian stream: `u32 n`, `u32 m`, then
//! `m` records of `u32 u, u32 v, f64 weight`, weights read as resistances.

use std::io::{self, Read, Write};

use crate::graph::{EdgeList, EdgeR};
use crate::matrix::SparseMatrix;

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_f64<R: Read>(reader: &mut R) -> io::Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a graph in the binary sparse format.
///
/// The edge list is returned as read; validate it before handing it to the
/// solvers.
pub fn read_graph<R: Read>(reader: &mut R) -> io::Result<EdgeList<EdgeR>> {
    let n = read_u32(reader)? as usize;
    let m = read_u32(reader)? as usize;
    let mut es = EdgeList::with_vertices(n);
    for _ in 0..m {
        let u = read_u32(reader)? as usize;
        let v = read_u32(reader)? as usize;
        let resistance = read_f64(reader)?;
        es.add_edge(u, v, resistance);
    }
    Ok(es)
}

/// Write the lower triangle of a symmetric matrix in Matrix Market
/// coordinate format (`symmetric`, `real`, 1-based).
pub fn write_matrix_market<W: Write>(writer: &mut W, matrix: &SparseMatrix) -> io::Result<()> {
    let lower: Vec<_> = matrix
        .elements()
        .iter()
        .filter(|e| e.row >= e.column)
        .collect();
    writeln!(writer, "%%MatrixMarket matrix coordinate real symmetric")?;
    writeln!(
        writer,
        "{} {} {}",
        matrix.rows(),
        matrix.columns(),
        lower.len()
    )?;
    for e in lower {
        writeln!(writer, "{} {} {}", e.row + 1, e.column + 1, e.value)?;
    }
    Ok(())
}

/// Write a vector in Matrix Market array format (`real`, `general`).
pub fn write_vector<W: Write>(writer: &mut W, vector: &[f64]) -> io::Result<()> {
    writeln!(writer, "%%MatrixMarket matrix array real general")?;
    writeln!(writer, "{} 1", vector.len())?;
    for value in vector {
        writeln!(writer, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(n: u32, edges: &[(u32, u32, f64)]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&n.to_le_bytes());
        bytes.extend_from_slice(&(edges.len() as u32).to_le_bytes());
        for &(u, v, w) in edges {
            bytes.extend_from_slice(&u.to_le_bytes());
            bytes.extend_from_slice(&v.to_le_bytes());
            bytes.extend_from_slice(&w.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn binary_round_trip() {
        let bytes = encode(3, &[(0, 1, 1.5), (1, 2, 2.5)]);
        let es = read_graph(&mut bytes.as_slice()).unwrap();
        assert_eq!(es.n, 3);
        assert_eq!(es.len(), 2);
        assert_eq!(es.edges[1].resistance, 2.5);
        assert!(es.validate().is_ok());
    }

    #[test]
    fn truncated_stream_fails() {
        let mut bytes = encode(3, &[(0, 1, 1.5)]);
        bytes.truncate(bytes.len() - 2);
        assert!(read_graph(&mut bytes.as_slice()).is_err());
    }

    #[test]
    fn matrix_market_header() {
        let mut es = EdgeList::<EdgeR>::with_vertices(2);
        es.add_edge(0, 1, 1.0);
        let l = SparseMatrix::laplacian(&es);
        let mut out = Vec::new();
        write_matrix_market(&mut out, &l).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("%%MatrixMarket matrix coordinate real symmetric")
        );
        assert_eq!(lines.next(), Some("2 2 3"));
    }
}
