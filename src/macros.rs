/// Build an `RbTree` from `key => value` pairs, inserted in order.
/// Evaluates to `TreeResult<RbTree>`, failing on the first rejected value
///
/// ```
/// use rbtree_arena::rbtree;
///
/// let tree = rbtree! {
///     1 => "a",
///     2 => "b",
/// }
/// .unwrap();
/// assert_eq!(tree.get(2), Some("b"));
/// ```
#[macro_export]
macro_rules! rbtree {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {
        (|| -> $crate::TreeResult<$crate::RbTree> {
            #[allow(unused_mut)]
            let mut tree = $crate::RbTree::new();
            $(
                tree.insert($key, $value)?;
            )*
            Ok(tree)
        })()
    };
}
