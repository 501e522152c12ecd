/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Calls a locally defined macro once for every combination of token trees
/// drawn from the bracketed groups, one from each group, in order.
///
/// This is how the operator impls are stamped out for sets of concrete types
/// and sizes that a generic impl cannot cover without overlapping another.
///
/// The `examples` module at the bottom of this file shows the syntax.
macro_rules! cartesian {
    (
        $([$($groups:tt)*])*
        $mac:ident!($($mac_match:tt)*)
        => {$($mac_body:tt)*}$(;)*
    )
    => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        cartesian__!{ @take($([$($groups)*])*) -> ($mac!()) }
    };
}

#[doc(hidden)]
macro_rules! cartesian__ {
    // no groups left; make the call
    (@take() -> ($mac:ident!($($args:tt)*)))
    => { $mac!{$($args)*} };

    // the remaining groups are packed into one tt so that they can be
    // repeated alongside each choice from the first group
    (@take([$($choice:tt)*] $($later:tt)*) -> $call:tt)
    => { cartesian__!{ @fan([$($choice)*] [$($later)*]) -> $call } };

    (@fan([$($choice:tt)*] $later:tt) -> $call:tt)
    => { $( cartesian__!{ @push($choice $later) -> $call } )* };

    // append the choice to the call and unpack the rest
    (@push($choice:tt [$($later:tt)*]) -> ($mac:ident!($($args:tt)*)))
    => { cartesian__!{ @take($($later)*) -> ($mac!($($args)* $choice)) } };
}

/// `cartesian!`, plus named groups written `@{name}` for the type and size
/// sets that recur throughout this crate.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

macro_rules! gen_each__ {
    //----------------------------
    // An ordinary bracketed group passes through unchanged

    ([[$($alternatives:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        $($alternatives)*
    ]] }};

    //----------------------------
    // Special groups of the form @{...}

    // NOTE: These lists are the only place that spells out which scalar
    //       types and sizes get concrete impls.

    // Plain numbers; the types that implement Scalar.
    ([@{scalar} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64} {Complex<f32>} {Complex<f64>}
    ]] }};

    // Real floats.
    ([@{real} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    // One-dimensional containers
    ([@{Vn} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {Vector} {Row}
    ]] }};

    // ...along with the container of opposite orientation
    ([@{Vn_Tn} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {Vector Row} {Row Vector}
    ]] }};

    // Ordered pairs of *distinct* sizes.
    //
    // Used for impls that must not overlap with a const-generic impl
    // that covers the case where both sizes are equal.
    ([@{m!=n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
               {1 2} {1 3} {1 4} {1 5} {1 6}
        {2 1}        {2 3} {2 4} {2 5} {2 6}
        {3 1} {3 2}        {3 4} {3 5} {3 6}
        {4 1} {4 2} {4 3}        {4 5} {4 6}
        {5 1} {5 2} {5 3} {5 4}        {5 6}
        {6 1} {6 2} {6 3} {6 4} {6 5}
    ]] }};

    // Matrix shapes `{R C [K...]}`, each with the vector lengths `K`
    // equal to neither `R` nor `C`.
    //
    // A vector of such a length has nothing to line up with in the matrix.
    ([@{r c !k} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {1 1 [2 3 4 5 6]} {1 2 [3 4 5 6]} {1 3 [2 4 5 6]}
        {1 4 [2 3 5 6]} {1 5 [2 3 4 6]} {1 6 [2 3 4 5]}
        {2 1 [3 4 5 6]} {2 2 [1 3 4 5 6]} {2 3 [1 4 5 6]}
        {2 4 [1 3 5 6]} {2 5 [1 3 4 6]} {2 6 [1 3 4 5]}
        {3 1 [2 4 5 6]} {3 2 [1 4 5 6]} {3 3 [1 2 4 5 6]}
        {3 4 [1 2 5 6]} {3 5 [1 2 4 6]} {3 6 [1 2 4 5]}
        {4 1 [2 3 5 6]} {4 2 [1 3 5 6]} {4 3 [1 2 5 6]}
        {4 4 [1 2 3 5 6]} {4 5 [1 2 3 6]} {4 6 [1 2 3 5]}
        {5 1 [2 3 4 6]} {5 2 [1 3 4 6]} {5 3 [1 2 4 6]}
        {5 4 [1 2 3 6]} {5 5 [1 2 3 4 6]} {5 6 [1 2 3 4]}
        {6 1 [2 3 4 5]} {6 2 [1 3 4 5]} {6 3 [1 2 4 5]}
        {6 4 [1 2 3 5]} {6 5 [1 2 3 4]} {6 6 [1 2 3 4 5]}
    ]] }};

    // Finally: Delegate to `cartesian`
    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => {
        cartesian!{
            $($groups)*
            $mac!$($defn_args)*
        }
    };
}

#[cfg(test)]
mod examples {
    mod cartesian {
        trait Trait { }
        // NOTE: Braces around the alternatives are not strictly necessary
        //       (cartesian simply iterates over token trees), but they tend
        //       to help group tokens and resolve any would-be ambiguities in
        //       the callback's match pattern.
        cartesian!{
            [{i32} {u32}]
            [{0} {1} {2} {3}]
            unique_name!({$T:ty} {$n:expr})
            => {
                impl Trait for [$T; $n] { }
            }
        }

        #[test]
        fn example_works() {
            fn assert_trait<T:Trait>() {}
            assert_trait::<[u32; 0]>();
            assert_trait::<[i32; 2]>();
        }
    }

    mod gen_each {
        trait Trait { }
        gen_each!{
            @{real}       // equivalent to [{f32} {f64}]
            @{m!=n}       // pairs like {1 2}, but never {3 3}
            unique_name!({$A:ty} {$r:tt $c:tt})
            => {
                impl Trait for [[$A; $c]; $r] { }
            }
        }

        #[test]
        fn example_works() {
            fn assert_trait<T:Trait>() {}
            assert_trait::<[[f64; 3]; 2]>();
            assert_trait::<[[f32; 1]; 6]>();
        }
    }
}
