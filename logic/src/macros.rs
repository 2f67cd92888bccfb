/// Forwards `!`, `&` and `|` on a packed vector type to its inherent
/// `not`, `and` and `or`, for every owned/borrowed operand combination.
macro_rules! impl_vec_ops {
    ($vec:ident) => {
        impl std::ops::Not for &$vec {
            type Output = $vec;

            fn not(self) -> $vec {
                $vec::not(self)
            }
        }

        impl std::ops::Not for $vec {
            type Output = $vec;

            fn not(self) -> $vec {
                $vec::not(&self)
            }
        }

        impl_vec_ops!(@binop $vec, BitAnd, bitand, and);
        impl_vec_ops!(@binop $vec, BitOr, bitor, or);
    };
    (@binop $vec:ident, $trait:ident, $method:ident, $inherent:ident) => {
        impl std::ops::$trait for &$vec {
            type Output = $vec;

            fn $method(self, rhs: Self) -> $vec {
                self.$inherent(rhs)
            }
        }

        impl std::ops::$trait<&$vec> for $vec {
            type Output = $vec;

            fn $method(self, rhs: &$vec) -> $vec {
                self.$inherent(rhs)
            }
        }

        impl std::ops::$trait<$vec> for &$vec {
            type Output = $vec;

            fn $method(self, rhs: $vec) -> $vec {
                self.$inherent(&rhs)
            }
        }

        impl std::ops::$trait for $vec {
            type Output = $vec;

            fn $method(self, rhs: Self) -> $vec {
                self.$inherent(&rhs)
            }
        }
    };
}
