use core::fmt;

use super::Render;

impl Render for () {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

macro_rules! render_tuple {
    ($($ty:ident $binding:ident),+) => {
        impl<$($ty: Render),+> Render for ($($ty,)+) {
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($($binding,)+) = self;
                let fields: &[&dyn Render] = &[$($binding),+];
                f.write_str("(")?;
                for (index, field) in fields.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    field.render(f)?;
                }
                f.write_str(")")
            }
        }
    };
}

render_tuple!(A a);
render_tuple!(A a, B b);
render_tuple!(A a, B b, C c);
render_tuple!(A a, B b, C c, D d);
render_tuple!(A a, B b, C c, D d, E e);
render_tuple!(A a, B b, C c, D d, E e, F f_);
render_tuple!(A a, B b, C c, D d, E e, F f_, G g);
render_tuple!(A a, B b, C c, D d, E e, F f_, G g, H h);
render_tuple!(A a, B b, C c, D d, E e, F f_, G g, H h, I i);
render_tuple!(A a, B b, C c, D d, E e, F f_, G g, H h, I i, J j);
render_tuple!(A a, B b, C c, D d, E e, F f_, G g, H h, I i, J j, K k);
render_tuple!(A a, B b, C c, D d, E e, F f_, G g, H h, I i, J j, K k, L l);
