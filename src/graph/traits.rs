/// 隣接頂点を列挙できるグラフ
///
/// 範囲外の頂点に対しては空の列挙を返すこと
pub trait Graph<IdxV> {
    fn adjacency(&self, v: IdxV) -> impl Iterator<Item = IdxV>;
}

pub trait WeightedGraph<IdxV, Weight>: Graph<IdxV> {
    fn adjacency_weight(&self, v: IdxV) -> impl Iterator<Item = (IdxV, Weight)>;
}
