/// Generate glm/glsl style swizzle operators
macro_rules! impl_swizzle_functions {
    ($vector_type1:ident, $vector_type2:ident, $vector_type3:ident, $S:ident, x) => {

    };
    ($vector_type1:ident, $vector_type2:ident, $vector_type3:ident, $S:ident, xy) => {

    };
    ($vector_type1:ident, $vector_type2:ident, $vector_type3:ident, $S:ident, xyz) => {

    };
    ($vector_type1:ident, $vector_type2:ident, $vector_type3:ident, $vector_type4:ident, $S:ident, x) => {

    };
    ($vector_type1:ident, $vector_type2:ident, $vector_type3:ident, $vector_type4:ident, $S:ident, xy) => {

    };
    ($vector_type1:ident, $vector_type2:ident, $vector_type3:ident, $vector_type4:ident, $S:ident, xyz) => {

    };
    ($vector_type1:ident, $vector_type2:ident, $vector_type3:ident, $vector_type4:ident, $S:ident, xyzw) => {

    };
}