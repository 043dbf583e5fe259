fn main() {
    // Message types are hand-written prost structs in src/proto.rs, so only
    // the service/client glue is generated here and no protoc is required.
    let get_joke = tonic_build::manual::Method::builder()
        .name("get_joke")
        .route_name("GetJoke")
        .input_type("crate::proto::JokeRequest")
        .output_type("crate::proto::JokeResponse")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let service = tonic_build::manual::Service::builder()
        .name("ChuckNorrisService")
        .package("jokes")
        .method(get_joke)
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
}
