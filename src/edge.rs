use std::fmt::{self, Display};

use num_traits::{Num, PrimInt};

use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
}

/// 隣接リストに格納される有向の記録
///
/// 無向の接続は互いに反転した2つの記録で表す。
/// `reversed` は始点と終点を入れ替えたものを返すこと。
/// 実装はこのクレート内の `Edge` と `WeightedEdge` に限る
pub trait EdgeRecord: sealed::Sealed + Sized {
    fn start_vertex(&self) -> usize;
    fn end_vertex(&self) -> usize;
    fn reversed(&self) -> Self;

    /// グラフに追加する前の検査
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    start_vertex: usize,
    end_vertex: usize,
}

impl Edge {
    pub const fn new(start_vertex: usize, end_vertex: usize) -> Self {
        Self {
            start_vertex,
            end_vertex,
        }
    }

    /// 符号付き整数などから検証して作る
    ///
    /// 負の値や `usize` に収まらない値は `Error::InvalidEdge`
    pub fn try_new<I: PrimInt + Display>(start_vertex: I, end_vertex: I) -> Result<Self> {
        Ok(Self::new(
            vertex_index(start_vertex)?,
            vertex_index(end_vertex)?,
        ))
    }

    pub const fn start_vertex(&self) -> usize {
        self.start_vertex
    }

    pub const fn end_vertex(&self) -> usize {
        self.end_vertex
    }

    pub const fn reversed(&self) -> Self {
        Self::new(self.end_vertex, self.start_vertex)
    }
}

impl sealed::Sealed for Edge {}

impl EdgeRecord for Edge {
    fn start_vertex(&self) -> usize {
        self.start_vertex
    }
    fn end_vertex(&self) -> usize {
        self.end_vertex
    }
    fn reversed(&self) -> Self {
        Edge::reversed(self)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start_vertex, self.end_vertex)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge<W> {
    start_vertex: usize,
    end_vertex: usize,
    weight: W,
}

impl<W: Num + Copy> WeightedEdge<W> {
    /// 重みを検査しない。外部からは `try_new` を使う
    pub(crate) const fn new(start_vertex: usize, end_vertex: usize, weight: W) -> Self {
        Self {
            start_vertex,
            end_vertex,
            weight,
        }
    }

    /// `Edge::try_new` に加えて、自身と等しくない重み (NaN) を拒否する
    pub fn try_new<I: PrimInt + Display>(start_vertex: I, end_vertex: I, weight: W) -> Result<Self> {
        let (start_vertex, end_vertex) = (vertex_index(start_vertex)?, vertex_index(end_vertex)?);
        check_weight(weight)?;
        Ok(Self::new(start_vertex, end_vertex, weight))
    }

    pub const fn start_vertex(&self) -> usize {
        self.start_vertex
    }

    pub const fn end_vertex(&self) -> usize {
        self.end_vertex
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end_vertex, self.start_vertex, self.weight)
    }

    pub fn copy(&self) -> Self {
        *self
    }
}

impl<W> sealed::Sealed for WeightedEdge<W> {}

impl<W: Num + Copy> EdgeRecord for WeightedEdge<W> {
    fn start_vertex(&self) -> usize {
        self.start_vertex
    }
    fn end_vertex(&self) -> usize {
        self.end_vertex
    }
    fn reversed(&self) -> Self {
        WeightedEdge::reversed(self)
    }
    fn validate(&self) -> Result<()> {
        check_weight(self.weight)
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --[{}]--> {}",
            self.start_vertex, self.weight, self.end_vertex
        )
    }
}

fn check_weight<W: PartialEq>(weight: W) -> Result<()> {
    #[allow(clippy::eq_op)]
    let nan = weight != weight;
    if nan {
        return Err(Error::InvalidEdge("weight is not a number".into()));
    }
    Ok(())
}

fn vertex_index<I: PrimInt + Display>(index: I) -> Result<usize> {
    index.to_usize().ok_or_else(|| {
        Error::InvalidEdge(format!("vertex index {index} is not a non-negative integer"))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn reversed_swaps_vertices() {
        let e = Edge::new(2, 5);
        assert_eq!(e.reversed(), Edge::new(5, 2));

        let w = WeightedEdge::new(2, 5, 1.5);
        let r = w.reversed();
        assert_eq!((r.start_vertex(), r.end_vertex()), (5, 2));
        assert_eq!(r.weight(), 1.5);
    }

    #[test]
    fn reversed_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let (u, v) = (rng.gen_range(0..100usize), rng.gen_range(0..100usize));
            let e = Edge::new(u, v);
            assert_eq!(e.reversed().reversed(), e);

            let w = WeightedEdge::new(u, v, rng.gen_range(-10.0..10.0));
            assert_eq!(w.reversed().reversed(), w);
        }
    }

    #[test]
    fn try_new_rejects_negative_index() {
        assert!(matches!(Edge::try_new(-1, 0), Err(Error::InvalidEdge(_))));
        assert!(matches!(Edge::try_new(0, -3i64), Err(Error::InvalidEdge(_))));
        assert!(matches!(
            WeightedEdge::try_new(-1i8, 0, 2.0),
            Err(Error::InvalidEdge(_))
        ));
        assert_eq!(Edge::try_new(3u8, 4).unwrap(), Edge::new(3, 4));
    }

    #[test]
    fn try_new_rejects_nan_weight() {
        assert!(matches!(
            WeightedEdge::try_new(0, 1, f64::NAN),
            Err(Error::InvalidEdge(_))
        ));
        // 符号の制約はない
        let e = WeightedEdge::try_new(0, 1, -4.25).unwrap();
        assert_eq!(e.weight(), -4.25);
        assert!(WeightedEdge::try_new(0, 1, f64::INFINITY).is_ok());
    }

    #[test]
    fn validate_weight() {
        assert!(Edge::new(0, 1).validate().is_ok());
        assert!(WeightedEdge::new(0, 1, 2.0).validate().is_ok());
        assert!(matches!(
            WeightedEdge::new(0, 1, f64::NAN).validate(),
            Err(Error::InvalidEdge(_))
        ));
    }

    #[test]
    fn copy_is_independent_and_equal() {
        let e = WeightedEdge::new(0, 1, 3);
        let mut c = e.copy();
        assert_eq!(c, e);
        c = c.reversed();
        assert_ne!(c, e);
        assert_eq!(e, WeightedEdge::new(0, 1, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Edge::new(0, 1).to_string(), "0 -> 1");
        assert_eq!(WeightedEdge::new(1, 2, 2.5).to_string(), "1 --[2.5]--> 2");
        assert_eq!(WeightedEdge::new(3, 0, -7).to_string(), "3 --[-7]--> 0");
    }
}
