/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */

use crate::inspect::Inspect;
use crate::walker::Walker;

// Tuples visit their members in order.
macro_rules! impl_tuple_inspect {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Inspect),+> Inspect for ($($name,)+) {
            fn inspect(&self, walker: &mut Walker<'_>) {
                $(
                    self.$idx.inspect(walker);
                )+
            }
        }
    };
}

impl_tuple_inspect!(A:0);
impl_tuple_inspect!(A:0, B:1);
impl_tuple_inspect!(A:0, B:1, C:2);
impl_tuple_inspect!(A:0, B:1, C:2, D:3);
impl_tuple_inspect!(A:0, B:1, C:2, D:3, E:4);
impl_tuple_inspect!(A:0, B:1, C:2, D:3, E:4, F:5);
impl_tuple_inspect!(A:0, B:1, C:2, D:3, E:4, F:5, G:6);
impl_tuple_inspect!(A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7);
