use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

use crate::core::CotizaError;

/// Company logo shipped with the binary as a `data:` URI, so rendering needs
/// no filesystem access. Loaded once at startup; callers may override it via
/// [`logo_data_uri_from_file`].
pub const DEFAULT_LOGO_DATA_URI: &str = concat!(
    "data:image/png;base64,",
    "iVBORw0KGgoAAAANSUhEUgAAAT4AAACLCAMAAADPlgVwAAACBFBMVEUAAADKAAK4EyC5Eh/IAQeBu5nHBw3EBg2/DBXHAwvE",
    "Aw3GAgnFAwwAxJrBChXH6FfBCxbM5lrACxm+DRvHAwvIAgm0FhjCBhNCPqTw4zuH1efv4zaX3Ohw6GlUaq9ep9704hZEUbFZ",
    "4nfv5D7w4iyh705YmNik7lFL34AdvZf03z9DRqeY61iT3+uT3+s5w5Wl7FkYwpqQ4e5e1oNHXLgKw5iX4OxCypGg8EqW5PAR",
    "wZgvzJKe61iV4/CK4O+j7k7x4x3u1ZDw5UBdo9tWgs7w2oPy4xpt4XHz4hlJZbqd7Vbr2IxM2IHt24n04w9BRaDw40/w1ZGm",
    "8USE6mB10+vv1oxH1Ipm3HlGS6Bgn9JBQJ2Y4+3s4UxESKFUf8Rktd1KXalF24JbmtJk3XtQasWl8UZmx97v4FBmxeJYl9Rj",
    "vOMm0JFiuuVl43DMAACZ5vH24wKd8kiF4PGl9EBb5GRP4m483n5F4HZm5lkz24ZJe87w14sl2Y0CzZREmNtJZ8WU8FIAsZ1G",
    "htRGjtdIcsnw2YFDod8V1pLw5lBs0+9nyuxCqONJXMB21u+E7Vhet+Xy5kNBsOYF15bz4yF66mBmwOiL71JJU7tDSKo9uOnz",
    "zmLy5jRQseQn2YJz51FXwupl5nC+105GuYjy2XRl0c9CwLYZtZl93OD001Ha4DWRympzwnpcjZcPAAAAbnRSTlMA9hQr5g9u",
    "hVailcy3/mUgrxVKPcDZhnj+NjNQHf4q/t7+/WqCuv1s/lH35o9lRjswx6hG/d6MJOLtnnxG2smknIjf3dzcyrywnFYwx1Ts",
    "pZnz8uLduayJZlTIubiCc3FI55hg3cqV0sm6sOvm4UMThqYAABI6SURBVHja7JrvT1JRGMev1l0/jai2Nka53JDagAiLqAjm",
    "rLGwXgSWudYvHa4sa4ZCIhITk0lDlku3Nsz+1J7z497nnCslvegFh/u53jf67rPv93kORzQbGxsbGxsbGxsbGxsbG5v/gNPh",
    "CAaDDqeu2fwbuiOa9PricY/HE4/7vFGnZtMuzmDSF89E5gyyqUzcG9Rs2kAPen2eSLlMxZXBHRWYjXi8Ds1mH5xJ6g6YIw+A",
    "AuNRzeZvOLzxdJlDo1c26gv6oMLerloibhfBrbctz8Pl8fQZZA0i3q5ZIS5/OBQjPA2F/S59f3njifTGxrYgT+ovPECkS/IX",
    "CMdufzS5HQuFA/pfF8ZUYnZ+/tOn7983trf3pI/lr2v8ucOxjxZuxEJ+t/YnhsZnF4B5AAySEOLsy0oKM0lNdQIhIqxuNXj7",
    "6R8EXh+/P8DtAZDBTz+ZQFpgKhDkcYEe1Q+A/phV3gcjgi0FDiVAHtW3QOSZAnH0MYGMlE/t9eEfY/Lq6A4N3gj5rVPvFo0e",
    "Tx+8RgTBH2AKxPWhdH0DYI/Jq8Ozl5Ccv8uPX+XzTB48zBy4I+/PbevJOat8fV0xqbh1a4NjAU1k6n4eAH8DRKABtcf8oUA2",
    "/ICUuttXD/Hc8Ufig2EPi/sqR+0x5s34gT3mb05Mn/rx44MPzdUt2ZM37qtcjtrj9TXkmfo2ynj2IwFUPH6usXqd+0OHyG3Z",
    "3mNiDzD3Lg4/jJ+QPtXjp4c/1gW4R7Tnl5fG4s4O02cIFIafET9MX1aIn5rLNzBWX1+vMXZ3d2vrVKLBDb/YuaH7O9weyMP8",
    "gTr2cH9lLk+OX1zFuz99plbb2traBZo/CLvrBMNg2G2xl8td5PryhrwFS/pwebCHE1Hx6m/iXaPRIO6+fQN36I8ZDMn2SHMv",
    "XuSrQyqvlL5tMX2IgstDn2kARJ6kjxNyWbK3mAN38uyznltapI/jUa+9NHzN5tev3yhUX41Ej9gbC8hbg+oDfxSUx/3hyQVv",
    "XaT4pZRrrz7N7aE/po/a8+uSPdBn2MP4kdGH9rC7ZTN+iHIXB64RsAfu0B/TRw1Ou8Xz3iILX574azH80N4G3jhbFGZUa++L",
    "/mZzbW0N/QG7NRa/1y7B3q3iDrWH6cPyYvr4pRWlnOXq1G2vewbsEYQANkEfANUVP+e+LRZ3FtnigB9reaUrv/KcnD51d+/E",
    "CNij+lBgk8qr1cTqXnpbLRaLYE9OHyClj8ubYy/fHqlUJJLJeIB4XDF9k/2DpbUSM8jsfYXuUsTqXr5SrVaLED7uLyeWV76u",
    "p8nj8lKRjCfu83m9yWg0GHQ4HE61Vof7zWAJAHcokHd37IW4NqoA6S7KwxsXDriD6AFzlAiIA21Blb9pNTFS4qA/2l1WXRx8",
    "y9hdKX3z+K82kAf2KBEPmAuqtmX38gLCJ/tbazbgIzBUNyAOvuVl3t1Fa/pYd88ReQBXFw2qVdI/oE+WShXqDhvc3AJqW9M6",
    "VvfKMkD1caRjH/sfL9gDwF2yO9QRzr8h8ipiAJsNak/YG/rNZQIffVL6UB7Rt0HcKTzp9jBxp1Kh8jCAED5A3BuXrvHwsfLK",
    "6SO1ZaS7KXeM5ysVAuavxPXNuITqVrk9PLdwiDxuz+PtNnfAJOgj4ARcaxB774Twwdbl+rg/vHD5BdEj/tLxpKObSsvRDX04",
    "AZsNS/guQ3WBopE+ePPUIMij9r6nfVH1jyitN8cKYAjk+hoNMXz6zT4xfPiRdwCiB4C8rv3+/Ms7II8IxAEI9qTwXcLwiatj",
    "Aex1uTyyeMEdMVgxBTYAM3x4aCH6MH6suEAi2b3yYPHeKVB/WOBmA3jdInzS5gB7RF96qjtnnqmvUODp4wZL/Q1gWgpfH4QP",
    "9XF7QNqn5pcG/kmfGT/U93qiRfhQ38UBai8R7cKjioR+r0D8FXgAib4GMKOLa5eHD/QxgXlqLz2+f29181FJtK5L+sAfBnAQ",
    "F4d05gPQXrvRO33Y5ICmBs7RB8MPUN8q2GMBZONvsL+/fwQXB4QP0ldFfay5sxC9/TlwrMfg4FlNAXRwd/fhw2FZ34owAPuB",
    "SeGGnh+ZCYa9X+cSU22V8WxPz3vOsVNax+McHX70cGlpSdT3uWBi6BvB7t5i3cXRR+z9Sgxp7dB7BuxxjvRqHY4+OnwX3LXW",
    "tyLqO2/+mXV309SXA3tY3H04fNC0d/CE1uE4Hjyi7qz6VgurgsBKq+5uFinE3gDYc2pt0XsEw3e80zfH6DDUtoW+q9heom/Q",
    "0l3Qx8IHkOwNzMLYa48DGL6eQ1png9Gz6qPxWzXyR/S5hO720cnHgME3kJjS2uUQhu/Yaa2jQXst9AEFKpDpe2PG69KVvj46",
    "+dDekNYuvccwfEc7e3GMCvZIhx9pBs+ufib+eHeJvpFJobumviraa5MTGL6Dh1mbD3SmRcfw0tIXFCjpuwDxw/wRfRNid/v4",
    "4tgs/qO93pPC4uil9o6e7MwOP4ADCxf4hekz+/nkKuhjsPIO4rHlMuvuJq8u2muH08Kp5Sz9xZGeno48vvxu7zx6nQaiKBzP",
    "OHZiWw5xEkITAj1AdEQXvTdRF/QmEAiQkACxQALEAgkECxYIFjzBit7+JHdiZ86MC3YcOjkgBMH4JV/OvWfm2i9Q6YbcHvY9",
    "uKMp8S2YSdUr/Uf4lNa3MsT36JGgN3cf6BWQowSHWLUEHj1Q/xvXL/t3PCSp5btjrxzWL6DqBUDCp7Q+Qe/Ro2ei+d0akB5X",
    "gqNOpVxziZ5h/oVbt+qWh33djX4o+E4KfA8kvznbzqL19fGR+UCvmCxTDQ5mdcLf239feOw9IuHRT9LbtzvkyGX6wZkzhfsi",
    "AxK+E7g43sdH9M5fqAwi5qnBwWwTdRwX432FAVOzHcex/ZYGmgVd8agVZONnvNa1cVD8zBAPLNsh2X7Ai+CLalf8Itg9fvx4",
    "/pi0GOHrVa/EpycHNT6q3bnnj8mOOPB212KO/JNhsfirnuhGalMuc7ttGkKmW6/JQ3nX65i9RzsT/HSA3Kq7Zv+fenaPS7fd",
    "P7OvvA9OW5wrPFu73uUFWp+UgCfwHVJWLmH1ChG+WHLcI3xiyQd6JYKD169JTeDx1z1Boq0xvw3sRseJjq15Jk5g1lsp8Lri",
    "H0KG22XKkzAmygMd6sGqwrcpF99bkoAX6XRVid6ZT4hc+IPwITk+iNp9JugdXV2plA0OhzqfsoIOvocP1MPMEfxYV/RNyGjH",
    "TwHqKmWegq+GEZryNk0AwHR8BO4l6dPjvi43EL3jAt+TB70KvhML3kc9fPuWVAZT19R4tUAT4ZGCrxKYCX5Mngv8dP9x9AZF",
    "htdK4BPxnybTZt/DR/CE5j9//irCt3UysmN8/AWhE/CE+9TgpdoVuYHYKBwc1+QzFzsOZuOpdvh38EX2AwObiQg3YmS02StH",
    "SsX4uTF8rXbyqPxh7uQdEb0bN26E/PTsGBf2IwP23Ldd4lsd4qPcWIfGV3JOGuABhEcKvgoPCxWw624KGNPKpgcZ4i+AD++N",
    "LgPD3IyFS+S9G4LfU4L3VGQHmt/4OIVHjx/hO6EGr6B3G42vqOpKcPRgqeHh8Ux8csoFpbPxuD6TzRbw4U2F4OZsNQ71+h7R",
    "6/N7KrIDC2dhv5Dfgzg+it3zywel13KV6sP4BZSy8CF0ciTtB0fBcxn4mJN1VKf2/V2HoEelG+rV08dPnz6+rDU/wif4PSH3",
    "TVcH9cJ8KN0Sc1KzFUFqq8O/THwki9LDSClEI7VZ+R29qj3HduouAgj4tKfQFoeJFWaRaeTYy0+fIvPJ9rd1DCu/capewU/Y",
    "D/jmET4KjsFLl3vJsmA2Huvw7+FjYv0bN5tnW90J6qNtji+lLPY4E2dgQV0CBL6WCe+Gh3HfMwuMwqde/hSZD+WrNz+y35Mn",
    "wn4qvpXU+lC6xeVr291IAWxidFkSn1D/YBbzlFvrvdzAM+L1pi5qTIcj+uUCD/hqhrQuV4/LvQ6z97TAB70ifE8vN1C9k4T9",
    "Qv/F8JUoXabEhMvwqGadbPcBtn6FPVZ+XZgPltJOa+TjI3En9yJgdVZYu7Af4ds6FdW7YBLZT0jHR60PC+bCClz9RcKT4JSH",
    "j6mTfh+nNhFJiZ11PL/amfhMdd/MQC+7esNVC9LjqaheZO+kSeMvUvA9uooFc5ngQJfTnVJnOfjUAFbcwVDoDsPOOr391zo6",
    "vkBh7ejznNzqDWsX9iOdbmDlHOIj6fhK5EZmxup5nINPrXX1JF0UINPekU4r+yo9klcdR9R4LkFUr8QH+1H1IjwmTZoZ2u+i",
    "gu/ZUuRGqTlpkFXUNsvDZ6dukn0VH84IP0Mobaz79J2zXZjg1K0hNixetOqdflLaT8X3CLlRKjg8PLvY03f5j8Dng4+fdaEZ",
    "+JBHiHQiWCmg5mZJDuV7eTLCQ9rvorJsXjpo6eI54jWlh4c/PD4YHd1A1wQdH2Y3kOlZRQCOzYjxE/Ybi9nvxQvCd07iWztv",
    "cHpMDY4W06Rm4QQ2ND50QmSUrjomLtmTLcPz80u4sTtuv1cyPGA/4gd8q5dHpVttNBrV6urV1Wp12rRp1dzgwMRSk1OHMWGX",
    "YfDZOfgS8z5ud/DuquvtUvZDeMB+F88icHrcp47N2rTw2Nq1ay9dWrVq1TL6HPbF0/KCI1+G80PdZ+bhk7uMepoBHT6A/cDv",
    "UDNhvxWED2qMbd75+vXXNx8+vH/38eb1ntZsWLZoSpb5EBw5cvkPjY6gED4S9x0aFRSfNsN+yfK9nLTfij1K4EzdfeAzwbt/",
    "vwcPwodgJ9cKBWVYw+PDwtiw8/BBrOXbXqyI3WDg8IX9sPbT8DVmzbjx+cub+0QvggdtWAV+2osuLI8NjY+7ipnz8UGMBzTX",
    "AUHgz9bknQn7vYq6H7YehK8q6R2Q9CQ2GHDZtNQ5aWGZQQl8loaP1bXddT4+xlQTWt4gd65XCUecX2g/lC/Z72KEr5lOD/zg",
    "v9irKxoeQ+MT2YHyy8fHLD0jOB2AIVCJ9Ajth/IdJ3zTZa98Dnop0j8PFiSKh8eQ+HS3t1u5+ALX0K+xc7MoPpSv7r9DDbV8",
    "yX4LQnyTifVrQe/+O/Q9XRsWlwoO1NvQ+BgBAr9aDj5R64ZrsbL4qmPJ8hVDe5Qv2W/BubDSb1DpfoD50oTyTWxqzbaXLtPA",
    "cp8Ni08MDaCO07cWS8Xnm+HlEJ9jizTQN040U9rf6ckVdfA3c8Hx0KjZ5oP9pmQGh80z1FUn+UPhAwCMAOrdWhD4DnFM4mu1",
    "cVuL7QdBYE0wi0YH2l+C36ym2v7GF/TWzeTTVzBfltTup9/J0ip02+SQ+JIXyQ1TyDBslsDHbOWw6LhYIynT/rT0qJ5ZMPOM",
    "sKmo3a/3BT6YLyksXmLjZIcV+m4PPjQ+vXy1HNbxoTEb6ceX4IfyRXws2BO59PVXpXbTIW6cFgsOgMhUq4PD7KHx4UqvLofp",
    "+FJXBWW+72TqjNT0xWW3g3rrA6yk1kxJDw6PF/tOtzYbHh+jRIDQV3V8COk0egN801M1yW/+WFXhd7xK+GYMiE93lVX4/qGh",
    "8UV3nSc0gcd7n+9mAezQ0xiGX9j+oBL4WLfod7CxthIebDB8XRWfVAsRqthPwxdNS1MBuqBXkh+1P6hE8epzUpvl3jsJ0MPj",
    "6zlLA0jJ6rUkPkNu2lpOxzAS02bERlF+ifxA+yu058DCDyVp9OUGg3zCAa/LPwQqPnlMVy1e+VVizV7crkJkwvOYnXAAb/eP",
    "NnFvs0WzKhIw05GFBTxxfrM0fo3NhRYup5C8LUsqyHtCNeXYCgusSHI3oJ+Pq5Tko0CNCYrjtWmzU3esFgvP4aecmXHfnuC6",
    "nY7rtuvhkSX4bY7tP+aPNbXtndiz3c9bNq/60z6dhZGKHcc5K0UOs9B4/Db15c3z3Oa3ZnHlv1WiAW4Fv5zqxaajhDF+jX5i",
    "WaCAZ2Tyg/0+wH6JgV+lsP65D2IiNcd2Hkjww3AGE6u8eVVx/W0WyzGg3gFnhPywdvn6IXvtcmpK5Y/Sr4SJDogKTvJ73uP3",
    "IZXfqf84NxQ1ATDB70AmvzUjegrAneA3q6mW9vPXX94Qv/iF3g2r/rDK/S0CwFm7Z4CfBvYzAfyg32awQfxf7yMpqk6WBMGP",
    "1Jg6a/Pp2bv2LV269MrhZac2bNhwatmqxSN46QQ37ySEB2L738mT1y9fMm/evCVTpixevHjKiF1CQEX3o23ePLUyUlk1G5P/",
    "789iHmmkkUYaaaSRRhpppJFGGmmkf1nfAMr5NIBU3uNBAAAAAElFTkSuQmCC"
);

/// Base64-encode a PNG from disk into a `data:` URI, for deployments that
/// brand documents with their own logo file.
pub fn logo_data_uri_from_file(path: &Path) -> Result<String, CotizaError> {
    let bytes = std::fs::read(path)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_logo_is_a_png_data_uri() {
        let payload = DEFAULT_LOGO_DATA_URI
            .strip_prefix("data:image/png;base64,")
            .expect("data URI prefix");
        let bytes = STANDARD.decode(payload).expect("valid base64");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
