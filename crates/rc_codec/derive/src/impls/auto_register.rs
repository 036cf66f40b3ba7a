use crate::derive_data::CodecMeta;

/// Generate the `inventory` submission of a record.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &CodecMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };

    // Only concrete types can be registered statically.
    if meta.impl_with_generic() {
        return crate::utils::empty();
    }

    let auto_register_ = crate::path::auto_register_(meta.rc_codec_path());
    let ident = meta.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(#auto_register_::__register::<#ident>)
        }
    }
}

/// Generate the `inventory` submission of a record.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &CodecMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
