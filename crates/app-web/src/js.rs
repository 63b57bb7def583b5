//! Thin reflection helpers for the untyped JS libraries (Globe.gl, Leaflet).

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Look up a global such as `L` or `Globe`.
pub fn global(name: &str) -> anyhow::Result<JsValue> {
    let v = Reflect::get(&js_sys::global(), &JsValue::from_str(name)).map_err(js_err)?;
    if v.is_undefined() || v.is_null() {
        anyhow::bail!("missing global `{}` (script not loaded?)", name);
    }
    Ok(v)
}

/// `target[method](...args)`
pub fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    let argv = args.iter().collect::<Array>();
    Reflect::apply(&f, target, &argv)
}

pub fn set(target: &JsValue, key: &str, value: impl Into<JsValue>) {
    if let Err(e) = Reflect::set(target, &JsValue::from_str(key), &value.into()) {
        log::warn!("[js] set {} failed: {:?}", key, e);
    }
}

pub fn get_f64(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Plain object literal from key/value pairs.
pub fn object(entries: &[(&str, JsValue)]) -> JsValue {
    let o = Object::new();
    for (k, v) in entries {
        set(&o, k, v.clone());
    }
    o.into()
}

#[inline]
pub fn pair(a: f64, b: f64) -> JsValue {
    Array::of2(&JsValue::from_f64(a), &JsValue::from_f64(b)).into()
}
